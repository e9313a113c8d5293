use std::sync::Arc;

use model::{station::Station, WithId};
use opendata::{mapping::station_schema_to_model, params::GetStationsParams, OpendataClient};

use crate::RequestResult;

/// Resolves free text queries to stations using the opendata API.
#[derive(Debug, Clone)]
pub struct StationService {
    opendata: Arc<OpendataClient>,
}

impl StationService {
    pub fn new(opendata: Arc<OpendataClient>) -> Self {
        Self { opendata }
    }

    /// All stations matching the query, in the order upstream ranks them.
    pub async fn get_stations<S: Into<String>>(
        &self,
        query: S,
    ) -> RequestResult<Vec<WithId<Station>>> {
        let stations = self
            .opendata
            .get_stations(&GetStationsParams::new(query))
            .await?;
        Ok(stations.into_iter().map(station_schema_to_model).collect())
    }

    /// The best match for the query, which is the first result upstream
    /// returns. `None` if nothing matches.
    pub async fn get_station<S: Into<String>>(
        &self,
        query: S,
    ) -> RequestResult<Option<WithId<Station>>> {
        Ok(self.get_stations(query).await?.into_iter().next())
    }
}
