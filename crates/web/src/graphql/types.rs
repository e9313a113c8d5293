use async_graphql::{SimpleObject, ID};
use chrono::{DateTime, FixedOffset};
use model::{
    connection::{Connection, ConnectionList, PageInfo, Section},
    journey::Journey,
    station::{Coordinates, Station},
    WithId,
};

#[derive(Debug, Clone, SimpleObject)]
pub struct CoordinatesModel {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinates> for CoordinatesModel {
    fn from(coordinates: Coordinates) -> Self {
        Self {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct StationModel {
    pub id: ID,
    pub name: String,
    pub coordinates: CoordinatesModel,
}

impl From<WithId<Station>> for StationModel {
    fn from(station: WithId<Station>) -> Self {
        Self {
            id: ID(station.id.into_raw()),
            name: station.content.name,
            coordinates: station.content.coordinates.into(),
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct SectionModel {
    pub from: StationModel,
    pub to: StationModel,
    pub departure: DateTime<FixedOffset>,
    pub arrival: DateTime<FixedOffset>,
}

impl From<Section> for SectionModel {
    fn from(section: Section) -> Self {
        Self {
            from: section.from.into(),
            to: section.to.into(),
            departure: section.departure,
            arrival: section.arrival,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct ConnectionModel {
    pub from: StationModel,
    pub to: StationModel,
    pub departure: DateTime<FixedOffset>,
    pub arrival: DateTime<FixedOffset>,
    pub sections: Vec<SectionModel>,
}

impl From<Connection> for ConnectionModel {
    fn from(connection: Connection) -> Self {
        Self {
            from: connection.from.into(),
            to: connection.to.into(),
            departure: connection.departure,
            arrival: connection.arrival,
            sections: connection.sections.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct PageInfoModel {
    /// Pass as `after` to fetch the next page.
    pub end_cursor: String,
    pub has_next_page: bool,
}

impl From<PageInfo> for PageInfoModel {
    fn from(page_info: PageInfo) -> Self {
        Self {
            end_cursor: page_info.end_cursor,
            has_next_page: page_info.has_next_page,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct ConnectionListModel {
    pub nodes: Vec<ConnectionModel>,
    pub page_info: PageInfoModel,
}

impl From<ConnectionList> for ConnectionListModel {
    fn from(list: ConnectionList) -> Self {
        Self {
            nodes: list.nodes.into_iter().map(Into::into).collect(),
            page_info: list.page_info.into(),
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct JourneyModel {
    pub id: ID,
    pub from: StationModel,
    pub to: StationModel,
    pub via: Vec<StationModel>,
}

impl From<WithId<Journey>> for JourneyModel {
    fn from(journey: WithId<Journey>) -> Self {
        Self {
            id: ID(journey.id.into_raw()),
            from: journey.content.from.into(),
            to: journey.content.to.into(),
            via: journey.content.via.into_iter().map(Into::into).collect(),
        }
    }
}
