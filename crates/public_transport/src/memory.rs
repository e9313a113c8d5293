//! In-memory `Database` for tests.
//!
//! A transaction holds the write lock until it is committed or dropped, so
//! transactions run one after another. Writes are staged on a copy of the
//! state and only written back on commit, so a dropped transaction leaves no
//! trace.

use std::sync::Arc;

use async_trait::async_trait;
use model::{journey::Journey, station::Station, WithId};
use tokio::sync::{OwnedRwLockWriteGuard, RwLock};
use utility::id::Id;

use crate::database::{
    Database, DatabaseAutocommit, DatabaseError, DatabaseTransaction, JourneyRepo, Result,
    StationRepo,
};

#[derive(Debug, Clone, Default)]
struct JourneyRow {
    id: String,
    from_station_id: String,
    to_station_id: String,
}

#[derive(Debug, Clone)]
struct ViaStationRow {
    journey_id: String,
    station_id: String,
    position: i32,
}

#[derive(Debug, Clone, Default)]
struct MemoryState {
    stations: Vec<WithId<Station>>,
    journeys: Vec<JourneyRow>,
    via_stations: Vec<ViaStationRow>,
    next_id: u64,
    fail_via_inserts: bool,
}

impl MemoryState {
    fn generate_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }

    fn station_id_by_key(&self, station: &Station) -> Option<Id<Station>> {
        self.stations
            .iter()
            .find(|row| row.content.same_key_as(station))
            .map(|row| row.id.clone())
    }

    fn insert_station(&mut self, station: &Station) -> Result<Id<Station>> {
        if self.station_id_by_key(station).is_some() {
            return Err(DatabaseError::other("duplicate station key"));
        }
        let id = Id::new(self.generate_id());
        self.stations.push(WithId::new(id.clone(), station.clone()));
        Ok(id)
    }

    fn station(&self, id: &str) -> Result<WithId<Station>> {
        self.stations
            .iter()
            .find(|row| row.id.raw_ref::<str>() == id)
            .cloned()
            .ok_or_else(|| DatabaseError::other(format!("no station with id {}", id)))
    }

    fn insert_journey(&mut self, from: &Id<Station>, to: &Id<Station>) -> Result<Id<Journey>> {
        self.station(from.raw_ref())?;
        self.station(to.raw_ref())?;
        let id = self.generate_id();
        self.journeys.push(JourneyRow {
            id: id.clone(),
            from_station_id: from.raw(),
            to_station_id: to.raw(),
        });
        Ok(Id::new(id))
    }

    fn insert_via_station(
        &mut self,
        journey: &Id<Journey>,
        station: &Id<Station>,
        position: i32,
    ) -> Result<()> {
        if self.fail_via_inserts {
            return Err(DatabaseError::other("via station insert rejected"));
        }
        self.station(station.raw_ref())?;
        self.via_stations.push(ViaStationRow {
            journey_id: journey.raw(),
            station_id: station.raw(),
            position,
        });
        Ok(())
    }

    fn get_journey(&self, id: &Id<Journey>) -> Result<WithId<Journey>> {
        let row = self
            .journeys
            .iter()
            .find(|row| row.id == id.raw_ref::<str>())
            .ok_or(DatabaseError::NotFound)?;
        let mut via_rows = self
            .via_stations
            .iter()
            .filter(|via| via.journey_id == row.id)
            .collect::<Vec<_>>();
        via_rows.sort_by_key(|via| via.position);
        let via = via_rows
            .into_iter()
            .map(|via| self.station(&via.station_id))
            .collect::<Result<Vec<_>>>()?;
        Ok(WithId::new(
            id.clone(),
            Journey::new(
                self.station(&row.from_station_id)?,
                self.station(&row.to_station_id)?,
                via,
            ),
        ))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every via station insert fail, to exercise rollback.
    pub fn with_failing_via_inserts(self) -> Self {
        // not shared yet, so this can not block
        if let Ok(mut state) = self.state.try_write() {
            state.fail_via_inserts = true;
        }
        self
    }

    pub async fn station_count(&self) -> usize {
        self.state.read().await.stations.len()
    }

    pub async fn journey_count(&self) -> usize {
        self.state.read().await.journeys.len()
    }
}

pub struct MemoryTransaction {
    staged: MemoryState,
    guard: OwnedRwLockWriteGuard<MemoryState>,
}

pub struct MemoryAutocommit {
    target: Arc<RwLock<MemoryState>>,
}

#[async_trait]
impl Database for MemoryDatabase {
    type Transaction = MemoryTransaction;
    type Autocommit = MemoryAutocommit;

    async fn transaction(&self) -> Result<Self::Transaction> {
        let guard = self.state.clone().write_owned().await;
        Ok(MemoryTransaction {
            staged: (*guard).clone(),
            guard,
        })
    }

    fn auto(&self) -> Self::Autocommit {
        MemoryAutocommit {
            target: self.state.clone(),
        }
    }
}

#[async_trait]
impl DatabaseTransaction for MemoryTransaction {
    async fn commit(self) -> Result<()> {
        let mut guard = self.guard;
        *guard = self.staged;
        Ok(())
    }
}

impl DatabaseAutocommit for MemoryAutocommit {}

#[async_trait]
impl StationRepo for MemoryTransaction {
    async fn station_id_by_key(&mut self, station: &Station) -> Result<Option<Id<Station>>> {
        Ok(self.staged.station_id_by_key(station))
    }

    async fn insert_station(&mut self, station: &Station) -> Result<Id<Station>> {
        self.staged.insert_station(station)
    }
}

#[async_trait]
impl JourneyRepo for MemoryTransaction {
    async fn insert_journey(
        &mut self,
        from: &Id<Station>,
        to: &Id<Station>,
    ) -> Result<Id<Journey>> {
        self.staged.insert_journey(from, to)
    }

    async fn insert_via_station(
        &mut self,
        journey: &Id<Journey>,
        station: &Id<Station>,
        position: i32,
    ) -> Result<()> {
        self.staged.insert_via_station(journey, station, position)
    }

    async fn get_journey(&mut self, id: &Id<Journey>) -> Result<WithId<Journey>> {
        self.staged.get_journey(id)
    }
}

#[async_trait]
impl StationRepo for MemoryAutocommit {
    async fn station_id_by_key(&mut self, station: &Station) -> Result<Option<Id<Station>>> {
        Ok(self.target.read().await.station_id_by_key(station))
    }

    async fn insert_station(&mut self, station: &Station) -> Result<Id<Station>> {
        self.target.write().await.insert_station(station)
    }
}

#[async_trait]
impl JourneyRepo for MemoryAutocommit {
    async fn insert_journey(
        &mut self,
        from: &Id<Station>,
        to: &Id<Station>,
    ) -> Result<Id<Journey>> {
        self.target.write().await.insert_journey(from, to)
    }

    async fn insert_via_station(
        &mut self,
        journey: &Id<Journey>,
        station: &Id<Station>,
        position: i32,
    ) -> Result<()> {
        self.target
            .write()
            .await
            .insert_via_station(journey, station, position)
    }

    async fn get_journey(&mut self, id: &Id<Journey>) -> Result<WithId<Journey>> {
        self.target.read().await.get_journey(id)
    }
}
