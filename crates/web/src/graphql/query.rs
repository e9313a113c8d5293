use std::marker::PhantomData;

use async_graphql::{Context, Object, ID};
use chrono::{DateTime, FixedOffset};
use public_transport::{connection::GetConnectionsArgs, database::Database, server::Services};
use utility::id::Id;

use super::{
    error::GraphqlResult,
    types::{ConnectionListModel, JourneyModel, StationModel},
};

pub struct QueryRoot<D>(PhantomData<D>);

impl<D> Default for QueryRoot<D> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

#[Object]
impl<D> QueryRoot<D>
where
    D: Database + 'static,
{
    /// Stations matching a free text query, best match first.
    async fn stations(
        &self,
        ctx: &Context<'_>,
        query: String,
    ) -> async_graphql::Result<Vec<StationModel>> {
        let services = ctx.data::<Services<D>>()?;
        let stations = services.stations.get_stations(query).await.graphql()?;
        Ok(stations.into_iter().map(Into::into).collect())
    }

    /// One page of connections. Pass `pageInfo.endCursor` as `after` for the
    /// next one.
    async fn connections(
        &self,
        ctx: &Context<'_>,
        from: String,
        to: String,
        via: Option<Vec<String>>,
        departs_at: Option<DateTime<FixedOffset>>,
        after: Option<String>,
    ) -> async_graphql::Result<ConnectionListModel> {
        let services = ctx.data::<Services<D>>()?;
        let list = services
            .connections
            .get_connections(GetConnectionsArgs {
                from,
                to,
                via,
                departs_at,
                after,
            })
            .await
            .graphql()?;
        Ok(list.into())
    }

    async fn journey(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<JourneyModel> {
        let services = ctx.data::<Services<D>>()?;
        let journey = services
            .journeys
            .get_journey(&Id::new(id.0))
            .await
            .graphql()?;
        Ok(journey.into())
    }
}
