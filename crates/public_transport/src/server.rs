use std::sync::Arc;

use opendata::OpendataClient;

use crate::{
    connection::ConnectionService, database::Database, journey::JourneyService,
    station::StationService,
};

/// All services, built once at startup and shared by every request.
pub struct Services<D>
where
    D: Database + Send + Sync + Sized + 'static,
{
    pub stations: StationService,
    pub connections: ConnectionService,
    pub journeys: JourneyService<D>,
}

impl<D> Services<D>
where
    D: Database + 'static,
{
    pub fn new(database: D, opendata: Arc<OpendataClient>) -> Self {
        Self {
            stations: StationService::new(opendata.clone()),
            connections: ConnectionService::new(opendata),
            journeys: JourneyService::new(database),
        }
    }
}

impl<D> Clone for Services<D>
where
    D: Database + 'static,
{
    fn clone(&self) -> Self {
        Self {
            stations: self.stations.clone(),
            connections: self.connections.clone(),
            journeys: self.journeys.clone(),
        }
    }
}
