use std::marker::PhantomData;

use async_graphql::{Context, Object};
use futures::future::try_join_all;
use model::{journey::Journey, station::Station, WithId};
use public_transport::{database::Database, server::Services, station::StationService};

use super::{
    error::{error_with_code, GraphqlResult, NOT_FOUND},
    types::JourneyModel,
};

pub struct MutationRoot<D>(PhantomData<D>);

impl<D> Default for MutationRoot<D> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

#[Object]
impl<D> MutationRoot<D>
where
    D: Database + 'static,
{
    /// Resolves every query to its best matching station and saves the
    /// journey between them.
    async fn save_journey(
        &self,
        ctx: &Context<'_>,
        from: String,
        to: String,
        via: Option<Vec<String>>,
    ) -> async_graphql::Result<JourneyModel> {
        let services = ctx.data::<Services<D>>()?;
        let via = via.unwrap_or_default();

        let (from, to, via) = futures::try_join!(
            resolve_station(&services.stations, &from),
            resolve_station(&services.stations, &to),
            try_join_all(
                via.iter()
                    .map(|query| resolve_station(&services.stations, query))
            ),
        )?;

        let journey = Journey::new(from, to, via);
        let id = services.journeys.save_journey(&journey).await.graphql()?;
        Ok(WithId::new(id, journey).into())
    }
}

async fn resolve_station(
    stations: &StationService,
    query: &str,
) -> async_graphql::Result<WithId<Station>> {
    stations.get_station(query).await.graphql()?.ok_or_else(|| {
        error_with_code(format!("no station found for query \"{}\"", query), NOT_FOUND)
    })
}
