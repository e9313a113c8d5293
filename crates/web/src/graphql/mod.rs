use async_graphql::{http::GraphiQLSource, EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use public_transport::{database::Database, server::Services};

pub mod error;
pub mod mutation;
pub mod query;
pub mod types;

use mutation::MutationRoot;
use query::QueryRoot;

pub type TransitSchema<D> = Schema<QueryRoot<D>, MutationRoot<D>, EmptySubscription>;

/// Builds the schema with the services available to every resolver.
pub fn build_schema<D>(services: Services<D>) -> TransitSchema<D>
where
    D: Database + 'static,
{
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(services)
    .finish()
}

pub fn routes<D>(schema: TransitSchema<D>) -> Router
where
    D: Database + 'static,
{
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler::<D>))
        .with_state(schema)
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn graphql_handler<D>(
    State(schema): State<TransitSchema<D>>,
    req: GraphQLRequest,
) -> GraphQLResponse
where
    D: Database + 'static,
{
    schema.execute(req.into_inner()).await.into()
}
