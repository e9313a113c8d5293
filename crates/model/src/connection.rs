use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{station::Station, WithId};

/// One leg of a connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub from: WithId<Station>,
    pub to: WithId<Station>,
    pub departure: DateTime<FixedOffset>,
    pub arrival: DateTime<FixedOffset>,
}

/// A scheduled trip between two stations. Connections are query results only
/// and are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub from: WithId<Station>,
    pub to: WithId<Station>,
    pub departure: DateTime<FixedOffset>,
    pub arrival: DateTime<FixedOffset>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Opaque cursor of the page following this one.
    pub end_cursor: String,
    pub has_next_page: bool,
}

/// A single page of a cursor paginated connection listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionList {
    pub nodes: Vec<Connection>,
    pub page_info: PageInfo,
}
