use async_trait::async_trait;
use model::station::Station;
use public_transport::database::{Result, StationRepo};
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;
use crate::{
    queries::station::{id_by_key, insert},
    PgDatabaseAutocommit, PgDatabaseTransaction,
};

#[derive(Debug, Clone, FromRow)]
pub struct StationRow {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl DatabaseRow for StationRow {
    type Model = Station;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id.clone())
    }

    fn to_model(self) -> Self::Model {
        Station::new(self.name, self.latitude, self.longitude)
    }
}

#[async_trait]
impl StationRepo for PgDatabaseAutocommit {
    async fn station_id_by_key(&mut self, station: &Station) -> Result<Option<Id<Station>>> {
        id_by_key(&self.pool, station).await
    }

    async fn insert_station(&mut self, station: &Station) -> Result<Id<Station>> {
        insert(&self.pool, station).await
    }
}

#[async_trait]
impl<'a> StationRepo for PgDatabaseTransaction<'a> {
    async fn station_id_by_key(&mut self, station: &Station) -> Result<Option<Id<Station>>> {
        id_by_key(&mut *self.tx, station).await
    }

    async fn insert_station(&mut self, station: &Station) -> Result<Id<Station>> {
        insert(&mut *self.tx, station).await
    }
}
