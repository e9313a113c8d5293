use std::env;

use axum::Router;
use public_transport::database::Database;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{common::route_not_found, graphql::TransitSchema};

pub mod api;
pub mod common;
pub mod graphql;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub bind_address: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_owned(),
        }
    }
}

impl WebConfig {
    /// Reads `WEB_BIND_ADDRESS`, defaulting to all interfaces on port 8080.
    pub fn from_env() -> Self {
        Self {
            bind_address: env::var("WEB_BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_owned()),
        }
    }
}

pub fn router<D>(schema: TransitSchema<D>) -> Router
where
    D: Database + 'static,
{
    graphql::routes(schema)
        .nest_service("/api", api::routes())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
}

pub async fn start_web_server<D>(
    config: WebConfig,
    schema: TransitSchema<D>,
) -> std::io::Result<()>
where
    D: Database + 'static,
{
    let listener = TcpListener::bind(&config.bind_address).await?;
    log::info!("Listening on {}.", config.bind_address);
    axum::serve(listener, router(schema).into_make_service()).await?;

    Ok(())
}
