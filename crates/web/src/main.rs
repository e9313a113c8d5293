use std::sync::Arc;

use database::{DatabaseConnectionInfo, PgDatabase};
use opendata::{OpendataClient, OpendataConfig};
use public_transport::server::Services;
use tracing_subscriber::EnvFilter;
use web::{graphql::build_schema, start_web_server, WebConfig};

#[tokio::main]
async fn main() {
    env_logger::init();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("could not install tracing subscriber.");

    // database
    let database_connection_info = DatabaseConnectionInfo::from_env()
        .expect("expected database connection info in env.");
    let database = PgDatabase::connect(database_connection_info)
        .await
        .expect("could not connect to database.");

    // upstream api
    let opendata_config = OpendataConfig::from_env();
    log::info!("Using opendata API at {}.", opendata_config.base_url);
    let opendata =
        OpendataClient::new(opendata_config).expect("could not build opendata client.");

    // web server
    let schema = build_schema(Services::new(database, Arc::new(opendata)));
    start_web_server(WebConfig::from_env(), schema)
        .await
        .expect("web server failed.");
}
