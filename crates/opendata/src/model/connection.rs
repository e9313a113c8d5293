use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utility::serde::date_time;

use super::location::StationSchema;

/// `GET /connections` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionsResponse {
    pub connections: Vec<ConnectionSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSchema {
    pub from: CheckpointSchema,

    pub to: CheckpointSchema,

    #[serde(default)]
    pub sections: Vec<SectionSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSchema {
    pub departure: CheckpointSchema,
    pub arrival: CheckpointSchema,
}

/// A station together with the times a connection passes it. Which of
/// `arrival` and `departure` is set depends on the position in the connection.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointSchema {
    pub station: StationSchema,

    #[serde(
        serialize_with = "date_time::serialize_offset_option",
        deserialize_with = "date_time::deserialize_offset_option",
        default
    )]
    pub arrival: Option<DateTime<FixedOffset>>,

    #[serde(
        serialize_with = "date_time::serialize_offset_option",
        deserialize_with = "date_time::deserialize_offset_option",
        default
    )]
    pub departure: Option<DateTime<FixedOffset>>,
}
