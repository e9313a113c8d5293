use serde::{Deserialize, Serialize};
use utility::id::HasId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub name: String,
    pub coordinates: Coordinates,
}

impl Station {
    pub fn new<S: Into<String>>(name: S, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            coordinates: Coordinates::new(latitude, longitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates.longitude
    }

    /// Whether both stations share the key `(name, latitude, longitude)` under
    /// which stations are deduplicated when persisted.
    pub fn same_key_as(&self, other: &Station) -> bool {
        self.name == other.name
            && self.coordinates.latitude == other.coordinates.latitude
            && self.coordinates.longitude == other.coordinates.longitude
    }
}

impl HasId for Station {
    type IdType = String;
}

#[cfg(test)]
mod tests {
    use utility::id::Id;

    use super::*;
    use crate::WithId;

    #[test]
    fn key_comparison_is_exact() {
        let a = Station::new("Bern", 46.948825, 7.439122);
        let b = Station::new("Bern", 46.948825, 7.439122);
        let c = Station::new("Bern", 46.948826, 7.439122);
        let d = Station::new("bern", 46.948825, 7.439122);
        assert!(a.same_key_as(&b));
        assert!(!a.same_key_as(&c));
        assert!(!a.same_key_as(&d));
    }

    #[test]
    fn with_id_flattens_station() {
        let station = WithId::new(
            Id::new("8503000".to_owned()),
            Station::new("Zürich HB", 47.378177, 8.540192),
        );
        let json = serde_json::to_value(&station).unwrap();
        assert_eq!(json["id"], "8503000");
        assert_eq!(json["name"], "Zürich HB");
        assert_eq!(json["coordinates"]["latitude"], 47.378177);
    }
}
