use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone)]
pub struct GetStationsParams {
    pub query: String,
}

impl GetStationsParams {
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("query", self.query.clone()),
            // only stations, no addresses or points of interest
            ("type", "station".to_owned()),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetConnectionsParams {
    pub from: String,
    pub to: String,
    pub via: Vec<String>,
    /// Sent as separate `date` and `time` parameters, in the offset the value
    /// carries.
    pub departs_at: Option<DateTime<FixedOffset>>,
    /// 1 - 16. Connections departing at the same time count as one.
    pub limit: Option<u32>,
    /// Zero based page index.
    pub page: Option<u32>,
}

impl GetConnectionsParams {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("from", self.from.clone()), ("to", self.to.clone())];
        pairs.extend(self.via.iter().map(|via| ("via[]", via.clone())));
        if let Some(departs_at) = &self.departs_at {
            pairs.push(("date", departs_at.format("%Y-%m-%d").to_string()));
            pairs.push(("time", departs_at.format("%H:%M").to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_query_filters_for_stations() {
        let pairs = GetStationsParams::new("Basel").query_pairs();
        assert_eq!(
            pairs,
            vec![("query", "Basel".to_owned()), ("type", "station".to_owned())]
        );
    }

    #[test]
    fn departure_is_split_into_date_and_time() {
        let params = GetConnectionsParams {
            from: "Zürich".to_owned(),
            to: "Bern".to_owned(),
            via: vec!["Olten".to_owned(), "Aarau".to_owned()],
            departs_at: Some(
                DateTime::parse_from_rfc3339("2024-05-12T07:05:00+02:00").unwrap(),
            ),
            limit: Some(2),
            page: Some(1),
        };
        let pairs = params.query_pairs();
        assert!(pairs.contains(&("via[]", "Olten".to_owned())));
        assert!(pairs.contains(&("via[]", "Aarau".to_owned())));
        assert!(pairs.contains(&("date", "2024-05-12".to_owned())));
        assert!(pairs.contains(&("time", "07:05".to_owned())));
        assert!(pairs.contains(&("limit", "2".to_owned())));
        assert!(pairs.contains(&("page", "1".to_owned())));
    }

    #[test]
    fn absent_options_are_not_sent() {
        let params = GetConnectionsParams {
            from: "Zürich".to_owned(),
            to: "Bern".to_owned(),
            ..Default::default()
        };
        let keys = params
            .query_pairs()
            .into_iter()
            .map(|(key, _)| key)
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["from", "to"]);
    }
}
