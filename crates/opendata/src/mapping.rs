use std::{error, fmt};

use chrono::{DateTime, FixedOffset};
use model::{
    connection::{Connection, Section},
    station::Station,
    WithId,
};
use utility::id::Id;

use crate::model::{CheckpointSchema, ConnectionSchema, StationSchema};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// A checkpoint lacks the arrival or departure time its position requires.
    MissingTime {
        station: String,
        field: &'static str,
    },
}

impl error::Error for MappingError {}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MappingError::MissingTime { station, field } => {
                write!(f, "missing {} time at station '{}'", field, station)
            }
        }
    }
}

pub fn station_schema_to_model(station: StationSchema) -> WithId<Station> {
    WithId::new(
        Id::new(station.id),
        Station::new(station.name, station.coordinate.x, station.coordinate.y),
    )
}

pub fn connection_schema_to_model(
    schema: ConnectionSchema,
) -> Result<Connection, MappingError> {
    let departure = departure_of(&schema.from)?;
    let arrival = arrival_of(&schema.to)?;

    let sections = schema
        .sections
        .into_iter()
        .map(|section| {
            Ok(Section {
                departure: departure_of(&section.departure)?,
                arrival: arrival_of(&section.arrival)?,
                from: station_schema_to_model(section.departure.station),
                to: station_schema_to_model(section.arrival.station),
            })
        })
        .collect::<Result<Vec<_>, MappingError>>()?;

    Ok(Connection {
        from: station_schema_to_model(schema.from.station),
        to: station_schema_to_model(schema.to.station),
        departure,
        arrival,
        sections,
    })
}

fn departure_of(
    checkpoint: &CheckpointSchema,
) -> Result<DateTime<FixedOffset>, MappingError> {
    checkpoint.departure.ok_or_else(|| MappingError::MissingTime {
        station: checkpoint.station.name.clone(),
        field: "departure",
    })
}

fn arrival_of(
    checkpoint: &CheckpointSchema,
) -> Result<DateTime<FixedOffset>, MappingError> {
    checkpoint.arrival.ok_or_else(|| MappingError::MissingTime {
        station: checkpoint.station.name.clone(),
        field: "arrival",
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn station_json(id: &str, name: &str, x: f64, y: f64) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "score": null,
            "coordinate": { "type": "WGS84", "x": x, "y": y },
            "distance": null
        })
    }

    fn connection_json() -> serde_json::Value {
        json!({
            "from": {
                "station": station_json("8503000", "Zürich HB", 47.378177, 8.540192),
                "arrival": null,
                "departure": "2024-05-12T10:02:00+0200",
                "platform": "31"
            },
            "to": {
                "station": station_json("8507000", "Bern", 46.948825, 7.439122),
                "arrival": "2024-05-12T10:58:00+0200",
                "departure": null,
                "platform": "7"
            },
            "duration": "00d00:56:00",
            "transfers": 0,
            "sections": [{
                "departure": {
                    "station": station_json("8503000", "Zürich HB", 47.378177, 8.540192),
                    "departure": "2024-05-12T10:02:00+0200"
                },
                "arrival": {
                    "station": station_json("8507000", "Bern", 46.948825, 7.439122),
                    "arrival": "2024-05-12T10:58:00+0200"
                }
            }]
        })
    }

    #[test]
    fn unread_upstream_fields_are_not_kept() {
        let schema: ConnectionSchema = serde_json::from_value(connection_json()).unwrap();
        let json = serde_json::to_value(&schema).unwrap();
        assert!(json.get("duration").is_none());
        assert!(json.get("transfers").is_none());
        assert!(json["from"].get("platform").is_none());
        assert!(json["from"]["station"].get("score").is_none());
        assert_eq!(
            json["from"]["station"]["coordinate"],
            json!({ "x": 47.378177, "y": 8.540192 })
        );
    }

    #[test]
    fn coordinates_are_renamed() {
        let schema: StationSchema =
            serde_json::from_value(station_json("8500010", "Basel SBB", 47.547, 7.589))
                .unwrap();
        let station = station_schema_to_model(schema);
        assert_eq!(station.id.raw(), "8500010");
        assert_eq!(station.content.name, "Basel SBB");
        assert_eq!(station.content.coordinates.latitude, 47.547);
        assert_eq!(station.content.coordinates.longitude, 7.589);
    }

    #[test]
    fn connection_takes_departure_and_arrival_from_endpoints() {
        let schema: ConnectionSchema = serde_json::from_value(connection_json()).unwrap();
        let connection = connection_schema_to_model(schema).unwrap();
        assert_eq!(connection.from.content.name, "Zürich HB");
        assert_eq!(connection.to.content.name, "Bern");
        assert_eq!(connection.departure.to_rfc3339(), "2024-05-12T10:02:00+02:00");
        assert_eq!(connection.arrival.to_rfc3339(), "2024-05-12T10:58:00+02:00");
        assert_eq!(connection.sections.len(), 1);
        let section = &connection.sections[0];
        assert_eq!(section.from.id.raw(), "8503000");
        assert_eq!(section.to.id.raw(), "8507000");
        assert_eq!(section.arrival, connection.arrival);
    }

    #[test]
    fn missing_section_time_is_reported() {
        let mut value = connection_json();
        value["sections"][0]["arrival"]["arrival"] = serde_json::Value::Null;
        let schema: ConnectionSchema = serde_json::from_value(value).unwrap();
        let error = connection_schema_to_model(schema).unwrap_err();
        assert_eq!(
            error,
            MappingError::MissingTime {
                station: "Bern".to_owned(),
                field: "arrival"
            }
        );
    }

    #[test]
    fn station_without_coordinates_does_not_decode() {
        let value = json!({ "id": "1", "name": "Nowhere", "coordinate": { "x": null, "y": null } });
        assert!(serde_json::from_value::<StationSchema>(value).is_err());
    }
}
