pub mod date_time {
    use chrono::{DateTime, FixedOffset};
    use serde::{de::Error, Deserialize as _, Deserializer, Serializer};

    /// Timestamp layout used by transport.opendata.ch, e.g. `2024-05-12T10:32:00+0200`.
    pub const OPENDATA_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

    /// Parses an upstream timestamp. Falls back to RFC 3339 so that offsets
    /// written with a colon are accepted as well.
    pub fn parse_offset(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_str(s, OPENDATA_FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(s))
    }

    pub fn serialize_offset<S>(
        value: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(OPENDATA_FORMAT).to_string())
    }

    pub fn deserialize_offset<'de, D>(
        deserializer: D,
    ) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_offset(&s).map_err(Error::custom)
    }

    pub fn serialize_offset_option<S>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serialize_offset(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize_offset_option<'de, D>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        match s {
            Some(s) => parse_offset(&s).map(Some).map_err(Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use serde::{Deserialize, Serialize};

    use super::date_time;

    #[derive(Serialize, Deserialize)]
    struct Checkpoint {
        #[serde(
            serialize_with = "date_time::serialize_offset_option",
            deserialize_with = "date_time::deserialize_offset_option",
            default
        )]
        departure: Option<chrono::DateTime<chrono::FixedOffset>>,
    }

    #[test]
    fn parses_upstream_offset_without_colon() {
        let parsed = date_time::parse_offset("2024-05-12T10:32:00+0200").unwrap();
        assert_eq!(parsed.year(), 2024);
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn parses_rfc3339_as_fallback() {
        let parsed = date_time::parse_offset("2024-05-12T10:32:00+02:00").unwrap();
        assert_eq!(parsed.minute(), 32);
    }

    #[test]
    fn null_timestamp_is_none() {
        let checkpoint: Checkpoint =
            serde_json::from_str(r#"{"departure": null}"#).unwrap();
        assert!(checkpoint.departure.is_none());
        let checkpoint: Checkpoint = serde_json::from_str("{}").unwrap();
        assert!(checkpoint.departure.is_none());
    }

    #[test]
    fn rejects_garbage_timestamp() {
        let result: Result<Checkpoint, _> =
            serde_json::from_str(r#"{"departure": "yesterday"}"#);
        assert!(result.is_err());
    }
}
