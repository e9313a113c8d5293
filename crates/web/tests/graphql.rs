use std::sync::Arc;

use async_graphql::{Request, Variables};
use opendata::{OpendataClient, OpendataConfig};
use public_transport::{memory::MemoryDatabase, server::Services};
use serde_json::{json, Value};
use web::graphql::{build_schema, TransitSchema};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

struct Fixture {
    upstream: MockServer,
    database: MemoryDatabase,
    schema: TransitSchema<MemoryDatabase>,
}

impl Fixture {
    async fn new() -> Self {
        let upstream = MockServer::start().await;
        for (query, id, name, x, y) in [
            ("Zürich", "8503000", "Zürich HB", 47.378177, 8.540192),
            ("Bern", "8507000", "Bern", 46.948825, 7.439122),
            ("Olten", "8500218", "Olten", 47.351935, 7.907699),
            ("Aarau", "8502113", "Aarau", 47.391361, 8.051284),
        ] {
            Mock::given(method("GET"))
                .and(path("/locations"))
                .and(query_param("query", query))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "stations": [
                        { "id": id, "name": name, "coordinate": { "type": "WGS84", "x": x, "y": y } }
                    ]
                })))
                .mount(&upstream)
                .await;
        }
        Mock::given(method("GET"))
            .and(path("/locations"))
            .and(query_param("query", "Atlantis"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "stations": [] })))
            .mount(&upstream)
            .await;

        let opendata =
            OpendataClient::new(OpendataConfig::default().with_base_url(upstream.uri()))
                .unwrap();
        let database = MemoryDatabase::new();
        let schema = build_schema(Services::new(database.clone(), Arc::new(opendata)));
        Self {
            upstream,
            database,
            schema,
        }
    }

    async fn execute(&self, query: &str, variables: Value) -> Value {
        let request = Request::new(query).variables(Variables::from_json(variables));
        serde_json::to_value(self.schema.execute(request).await).unwrap()
    }
}

const SAVE_JOURNEY: &str = "
    mutation Save($from: String!, $to: String!, $via: [String!]) {
        saveJourney(from: $from, to: $to, via: $via) {
            id
            from { id name coordinates { latitude longitude } }
            to { name }
            via { name }
        }
    }
";

const GET_JOURNEY: &str = "
    query Get($id: ID!) {
        journey(id: $id) {
            id
            from { name coordinates { latitude longitude } }
            to { name }
            via { id name }
        }
    }
";

fn error_code(response: &Value) -> &Value {
    &response["errors"][0]["extensions"]["code"]
}

#[tokio::test]
async fn stations_query_maps_upstream_coordinates() {
    let fixture = Fixture::new().await;
    let response = fixture
        .execute(
            "{ stations(query: \"Bern\") { id name coordinates { latitude longitude } } }",
            json!({}),
        )
        .await;
    assert_eq!(
        response["data"]["stations"],
        json!([{
            "id": "8507000",
            "name": "Bern",
            "coordinates": { "latitude": 46.948825, "longitude": 7.439122 }
        }])
    );
}

#[tokio::test]
async fn saved_journey_can_be_read_back() {
    let fixture = Fixture::new().await;
    let saved = fixture
        .execute(
            SAVE_JOURNEY,
            json!({ "from": "Zürich", "to": "Bern", "via": ["Olten", "Aarau"] }),
        )
        .await;
    assert!(saved.get("errors").is_none(), "{}", saved);
    let saved = &saved["data"]["saveJourney"];
    assert_eq!(saved["from"]["id"], "8503000");
    assert_eq!(saved["via"], json!([{ "name": "Olten" }, { "name": "Aarau" }]));

    let loaded = fixture
        .execute(GET_JOURNEY, json!({ "id": saved["id"] }))
        .await;
    let loaded = &loaded["data"]["journey"];
    assert_eq!(loaded["id"], saved["id"]);
    assert_eq!(loaded["from"], json!({
        "name": "Zürich HB",
        "coordinates": { "latitude": 47.378177, "longitude": 8.540192 }
    }));
    assert_eq!(loaded["to"]["name"], "Bern");
    let via_names = loaded["via"]
        .as_array()
        .unwrap()
        .iter()
        .map(|station| station["name"].clone())
        .collect::<Vec<_>>();
    assert_eq!(via_names, vec![json!("Olten"), json!("Aarau")]);
}

#[tokio::test]
async fn journeys_share_identical_stations() {
    let fixture = Fixture::new().await;
    fixture
        .execute(SAVE_JOURNEY, json!({ "from": "Zürich", "to": "Bern" }))
        .await;
    fixture
        .execute(SAVE_JOURNEY, json!({ "from": "Zürich", "to": "Olten" }))
        .await;
    assert_eq!(fixture.database.station_count().await, 3);
    assert_eq!(fixture.database.journey_count().await, 2);
}

#[tokio::test]
async fn unknown_station_fails_save_without_writing() {
    let fixture = Fixture::new().await;
    let response = fixture
        .execute(
            SAVE_JOURNEY,
            json!({ "from": "Zürich", "to": "Bern", "via": ["Atlantis"] }),
        )
        .await;
    assert_eq!(error_code(&response), "NOT_FOUND");
    assert_eq!(
        response["errors"][0]["message"],
        "no station found for query \"Atlantis\""
    );
    assert_eq!(fixture.database.journey_count().await, 0);
}

#[tokio::test]
async fn unknown_journey_is_not_found() {
    let fixture = Fixture::new().await;
    let response = fixture
        .execute(GET_JOURNEY, json!({ "id": "does-not-exist" }))
        .await;
    assert_eq!(response["data"], Value::Null);
    assert_eq!(error_code(&response), "NOT_FOUND");
}

#[tokio::test]
async fn connections_query_pages_through_upstream() {
    let fixture = Fixture::new().await;
    let checkpoint = |name: &str, key: &str, time: &str| {
        json!({
            "station": { "id": "1", "name": name, "coordinate": { "x": 47.0, "y": 8.0 } },
            (key): time
        })
    };
    Mock::given(method("GET"))
        .and(path("/connections"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "connections": [{
                "from": checkpoint("Zürich HB", "departure", "2024-05-12T10:02:00+0200"),
                "to": checkpoint("Bern", "arrival", "2024-05-12T10:58:00+0200"),
                "sections": [{
                    "departure": checkpoint("Zürich HB", "departure", "2024-05-12T10:02:00+0200"),
                    "arrival": checkpoint("Bern", "arrival", "2024-05-12T10:58:00+0200")
                }]
            }]
        })))
        .expect(1)
        .mount(&fixture.upstream)
        .await;

    let response = fixture
        .execute(
            "query Page($after: String) {
                connections(from: \"Zürich\", to: \"Bern\", after: $after) {
                    nodes { from { name } to { name } departure sections { arrival } }
                    pageInfo { endCursor hasNextPage }
                }
            }",
            json!({ "after": "MQ==" }),
        )
        .await;
    let list = &response["data"]["connections"];
    assert_eq!(list["nodes"][0]["from"]["name"], "Zürich HB");
    assert_eq!(list["nodes"][0]["departure"], "2024-05-12T10:02:00+02:00");
    assert_eq!(
        list["nodes"][0]["sections"][0]["arrival"],
        "2024-05-12T10:58:00+02:00"
    );
    assert_eq!(list["pageInfo"], json!({ "endCursor": "Mg==", "hasNextPage": false }));
}

#[tokio::test]
async fn malformed_cursor_is_bad_user_input() {
    let fixture = Fixture::new().await;
    let response = fixture
        .execute(
            "{ connections(from: \"Zürich\", to: \"Bern\", after: \"YWJj\") { pageInfo { endCursor } } }",
            json!({}),
        )
        .await;
    assert_eq!(error_code(&response), "BAD_USER_INPUT");
}

#[tokio::test]
async fn upstream_failure_is_reported_as_upstream_error() {
    let fixture = Fixture::new().await;
    Mock::given(method("GET"))
        .and(path("/connections"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&fixture.upstream)
        .await;
    let response = fixture
        .execute(
            "{ connections(from: \"Zürich\", to: \"Bern\") { pageInfo { endCursor } } }",
            json!({}),
        )
        .await;
    assert_eq!(error_code(&response), "UPSTREAM_ERROR");
}
