use async_trait::async_trait;
use model::{journey::Journey, station::Station, WithId};
use public_transport::database::{JourneyRepo, Result};
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::{station::StationRow, with_id};
use crate::{
    queries::journey::{get, insert, insert_via_station},
    PgDatabaseAutocommit, PgDatabaseTransaction,
};

/// A journey joined with its endpoints and at most one via station.
#[derive(Debug, Clone, FromRow)]
pub struct JourneyStationsRow {
    pub id: String,
    pub from_id: String,
    pub from_name: String,
    pub from_latitude: f64,
    pub from_longitude: f64,
    pub to_id: String,
    pub to_name: String,
    pub to_latitude: f64,
    pub to_longitude: f64,
    pub via_id: Option<String>,
    pub via_name: Option<String>,
    pub via_latitude: Option<f64>,
    pub via_longitude: Option<f64>,
}

impl JourneyStationsRow {
    fn from_station(&self) -> WithId<Station> {
        with_id(StationRow {
            id: self.from_id.clone(),
            name: self.from_name.clone(),
            latitude: self.from_latitude,
            longitude: self.from_longitude,
        })
    }

    fn to_station(&self) -> WithId<Station> {
        with_id(StationRow {
            id: self.to_id.clone(),
            name: self.to_name.clone(),
            latitude: self.to_latitude,
            longitude: self.to_longitude,
        })
    }

    fn via_station(self) -> Option<WithId<Station>> {
        match (self.via_id, self.via_name, self.via_latitude, self.via_longitude) {
            (Some(id), Some(name), Some(latitude), Some(longitude)) => {
                Some(with_id(StationRow {
                    id,
                    name,
                    latitude,
                    longitude,
                }))
            }
            _ => None,
        }
    }

    /// Folds the rows of one journey, already ordered by via position, into
    /// the journey. `None` if there are no rows.
    pub fn gather(rows: Vec<JourneyStationsRow>) -> Option<WithId<Journey>> {
        let first = rows.first()?;
        let id = Id::new(first.id.clone());
        let from = first.from_station();
        let to = first.to_station();
        let via = rows
            .into_iter()
            .filter_map(JourneyStationsRow::via_station)
            .collect();
        Some(WithId::new(id, Journey::new(from, to, via)))
    }
}

#[async_trait]
impl JourneyRepo for PgDatabaseAutocommit {
    async fn insert_journey(
        &mut self,
        from: &Id<Station>,
        to: &Id<Station>,
    ) -> Result<Id<Journey>> {
        insert(&self.pool, from, to).await
    }

    async fn insert_via_station(
        &mut self,
        journey: &Id<Journey>,
        station: &Id<Station>,
        position: i32,
    ) -> Result<()> {
        insert_via_station(&self.pool, journey, station, position).await
    }

    async fn get_journey(&mut self, id: &Id<Journey>) -> Result<WithId<Journey>> {
        get(&self.pool, id).await
    }
}

#[async_trait]
impl<'a> JourneyRepo for PgDatabaseTransaction<'a> {
    async fn insert_journey(
        &mut self,
        from: &Id<Station>,
        to: &Id<Station>,
    ) -> Result<Id<Journey>> {
        insert(&mut *self.tx, from, to).await
    }

    async fn insert_via_station(
        &mut self,
        journey: &Id<Journey>,
        station: &Id<Station>,
        position: i32,
    ) -> Result<()> {
        insert_via_station(&mut *self.tx, journey, station, position).await
    }

    async fn get_journey(&mut self, id: &Id<Journey>) -> Result<WithId<Journey>> {
        get(&mut *self.tx, id).await
    }
}
