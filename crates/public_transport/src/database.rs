use std::{error, result};

use async_trait::async_trait;
use model::{journey::Journey, station::Station, WithId};
use utility::id::Id;

#[derive(Debug)]
pub enum DatabaseError {
    NotFound,
    Other(Box<dyn error::Error + Send + Sync>),
}

impl DatabaseError {
    pub fn other<E: Into<Box<dyn error::Error + Send + Sync>>>(why: E) -> Self {
        Self::Other(why.into())
    }
}

pub type Result<T> = result::Result<T, DatabaseError>;

#[async_trait]
pub trait StationRepo {
    /// Id of the stored station with exactly the same name and coordinates.
    async fn station_id_by_key(&mut self, station: &Station) -> Result<Option<Id<Station>>>;

    /// Stores the station and returns the generated id.
    async fn insert_station(&mut self, station: &Station) -> Result<Id<Station>>;
}

#[async_trait]
pub trait JourneyRepo {
    async fn insert_journey(
        &mut self,
        from: &Id<Station>,
        to: &Id<Station>,
    ) -> Result<Id<Journey>>;

    /// Links a via station to a journey. `position` is the index of the
    /// station within the journey's via list.
    async fn insert_via_station(
        &mut self,
        journey: &Id<Journey>,
        station: &Id<Station>,
        position: i32,
    ) -> Result<()>;

    /// Loads a journey with all its stations, via stations ordered by position.
    async fn get_journey(&mut self, id: &Id<Journey>) -> Result<WithId<Journey>>;
}

pub trait DatabaseOperations: StationRepo + JourneyRepo {}

impl<T: StationRepo + JourneyRepo> DatabaseOperations for T {}

#[async_trait]
pub trait DatabaseTransaction: DatabaseOperations {
    async fn commit(self) -> Result<()>;
}

pub trait DatabaseAutocommit: DatabaseOperations {}

/// Store for saved journeys. Cloning must be cheap and clones share the
/// underlying connections, so one instance can serve concurrent requests.
/// Transactions that are dropped without `commit` roll back.
#[async_trait]
pub trait Database: Clone + Send + Sync + Sized {
    type Transaction: DatabaseTransaction + Send;
    type Autocommit: DatabaseAutocommit + Send;

    async fn transaction(&self) -> Result<Self::Transaction>;

    fn auto(&self) -> Self::Autocommit;
}
