use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use model::connection::{ConnectionList, PageInfo};
use opendata::{
    mapping::connection_schema_to_model, params::GetConnectionsParams, ApiError,
    OpendataClient,
};

use crate::{
    cursor::{decode_cursor, encode_cursor},
    RequestResult,
};

/// Number of connections per page. Upstream is always asked for exactly this
/// many.
pub const PAGE_SIZE: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct GetConnectionsArgs {
    pub from: String,
    pub to: String,
    pub via: Option<Vec<String>>,
    pub departs_at: Option<DateTime<FixedOffset>>,
    /// Cursor returned as `end_cursor` of the previous page.
    pub after: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ConnectionService {
    opendata: Arc<OpendataClient>,
}

impl ConnectionService {
    pub fn new(opendata: Arc<OpendataClient>) -> Self {
        Self { opendata }
    }

    /// Fetches one page of connections.
    ///
    /// The returned `end_cursor` always points at the following page, even if
    /// this page was the last one. `has_next_page` is `false` once upstream
    /// returns fewer than `PAGE_SIZE` connections.
    pub async fn get_connections(
        &self,
        args: GetConnectionsArgs,
    ) -> RequestResult<ConnectionList> {
        let page = match args.after.as_deref() {
            Some(after) if !after.is_empty() => decode_cursor(after)?,
            _ => 0,
        };

        let connections = self
            .opendata
            .get_connections(&GetConnectionsParams {
                from: args.from,
                to: args.to,
                via: args.via.unwrap_or_default(),
                departs_at: args.departs_at,
                limit: Some(PAGE_SIZE as u32),
                page: Some(page),
            })
            .await?;

        let has_next_page = connections.len() >= PAGE_SIZE;
        let nodes = connections
            .into_iter()
            .take(PAGE_SIZE)
            .map(connection_schema_to_model)
            .collect::<Result<Vec<_>, _>>()
            .map_err(ApiError::from)?;

        log::debug!("Fetched {} connections on page {}.", nodes.len(), page);

        Ok(ConnectionList {
            nodes,
            page_info: PageInfo {
                end_cursor: encode_cursor(page + 1),
                has_next_page,
            },
        })
    }
}
