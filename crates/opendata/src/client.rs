use std::{env, time::Duration};

use serde::de::DeserializeOwned;

use crate::{
    model::{ConnectionSchema, ConnectionsResponse, LocationsResponse, StationSchema},
    params::{GetConnectionsParams, GetStationsParams},
    ApiError,
};

pub const OPENDATA_API_URL: &str = "http://transport.opendata.ch/v1";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct OpendataConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OpendataConfig {
    fn default() -> Self {
        Self {
            base_url: OPENDATA_API_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn parse_timeout_secs(value: Option<String>, default: u64) -> u64 {
    match value {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            log::warn!(
                "Ignoring invalid OPENDATA_TIMEOUT_SECS '{}', using {} seconds.",
                value,
                default
            );
            default
        }),
    }
}

impl OpendataConfig {
    /// Reads `OPENDATA_BASE_URL` and `OPENDATA_TIMEOUT_SECS`, falling back to
    /// the public API and a ten second timeout.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = env::var("OPENDATA_BASE_URL").unwrap_or(defaults.base_url);
        let timeout_secs =
            parse_timeout_secs(env::var("OPENDATA_TIMEOUT_SECS").ok(), defaults.timeout_secs);
        Self {
            base_url,
            timeout_secs,
        }
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Client for the transport.opendata.ch API. Build it once and share it, the
/// underlying connection pool is reused across requests.
#[derive(Debug, Clone)]
pub struct OpendataClient {
    config: OpendataConfig,
    http: reqwest::Client,
}

impl OpendataClient {
    pub fn new(config: OpendataConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("transit-journeys/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, http })
    }

    /// Search stations matching a free text query, best match first.
    pub async fn get_stations(
        &self,
        params: &GetStationsParams,
    ) -> Result<Vec<StationSchema>, ApiError> {
        let response: LocationsResponse =
            self.get("locations", &params.query_pairs()).await?;
        Ok(response.stations)
    }

    pub async fn get_connections(
        &self,
        params: &GetConnectionsParams,
    ) -> Result<Vec<ConnectionSchema>, ApiError> {
        let response: ConnectionsResponse =
            self.get("connections", &params.query_pairs()).await?;
        Ok(response.connections)
    }

    /// Fetch and decode an endpoint. Non-2xx statuses and bodies not matching
    /// `T` are reported as errors.
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        log::debug!("Requesting endpoint '{url}' with {query:?}.");

        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.ok();
            log::warn!("Endpoint '{url}' answered with status {status}.");
            return Err(ApiError::InvalidResponse {
                status_code: status,
                url,
                response: text,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|why| {
            log::warn!("Could not decode response of '{url}': {why}");
            ApiError::from(why)
        })
    }
}
