use model::{journey::Journey, station::Station, WithId};
use utility::id::Id;

use crate::{
    database::{Database, DatabaseTransaction, JourneyRepo, StationRepo},
    RequestResult,
};

/// Persists journeys and the stations they reference.
#[derive(Debug, Clone)]
pub struct JourneyService<D>
where
    D: Database,
{
    database: D,
}

impl<D> JourneyService<D>
where
    D: Database,
{
    pub fn new(database: D) -> Self {
        Self { database }
    }

    pub async fn get_journey(&self, id: &Id<Journey>) -> RequestResult<WithId<Journey>> {
        Ok(self.database.auto().get_journey(id).await?)
    }

    /// Stores a journey and returns its id. Stations are deduplicated by name
    /// and coordinates. Either everything is written or nothing is.
    pub async fn save_journey(&self, journey: &Journey) -> RequestResult<Id<Journey>> {
        let mut tx = self.database.transaction().await?;

        let from_id = insert_or_get_station(&mut tx, &journey.from.content).await?;
        let to_id = insert_or_get_station(&mut tx, &journey.to.content).await?;
        let mut via_ids = Vec::with_capacity(journey.via.len());
        for station in journey.via.iter() {
            via_ids.push(insert_or_get_station(&mut tx, &station.content).await?);
        }

        let journey_id = tx.insert_journey(&from_id, &to_id).await?;
        for (position, station_id) in via_ids.iter().enumerate() {
            tx.insert_via_station(&journey_id, station_id, position as i32)
                .await?;
        }

        tx.commit().await?;
        log::info!(
            "Saved journey {}: {}.",
            journey_id,
            journey
                .stations()
                .map(|station| station.content.name.as_str())
                .collect::<Vec<_>>()
                .join(" -> ")
        );
        Ok(journey_id)
    }
}

/// Returns the id of the stored station with the same name and coordinates,
/// inserting the station first if there is none.
async fn insert_or_get_station<R>(repo: &mut R, station: &Station) -> RequestResult<Id<Station>>
where
    R: StationRepo + Send,
{
    if let Some(id) = repo.station_id_by_key(station).await? {
        log::debug!("Reusing station {} for '{}'.", id, station.name);
        return Ok(id);
    }
    let id = repo.insert_station(station).await?;
    log::debug!("Inserted station {} for '{}'.", id, station.name);
    Ok(id)
}
