use serde::{Deserialize, Serialize};

/// `GET /locations` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub stations: Vec<StationSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationSchema {
    /// upstream identifier, e.g. `8503000` for Zürich HB
    pub id: String,

    pub name: String,

    pub coordinate: CoordinateSchema,
}

/// WGS84 coordinate. The API puts the latitude into `x` and the longitude
/// into `y`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinateSchema {
    pub x: f64,

    pub y: f64,
}
