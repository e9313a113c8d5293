use model::station::Station;
use public_transport::database::Result;
use sqlx::{Executor, Postgres};
use utility::id::Id;

use super::convert_error;

pub async fn id_by_key<'c, E>(executor: E, station: &Station) -> Result<Option<Id<Station>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar(
        "
        SELECT
            id
        FROM
            stations
        WHERE
            name = $1 AND latitude = $2 AND longitude = $3;
        ",
    )
    .bind(&station.name)
    .bind(station.latitude())
    .bind(station.longitude())
    .fetch_optional(executor)
    .await
    .map_err(convert_error)
    .map(|id: Option<String>| id.map(Id::new))
}

/// Inserts the station, or returns the id of the row that already has the same
/// name and coordinates.
pub async fn insert<'c, E>(executor: E, station: &Station) -> Result<Id<Station>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar(
        "
        INSERT INTO stations(
            name,
            latitude,
            longitude
        )
        VALUES ($1, $2, $3)
        ON CONFLICT (name, latitude, longitude)
        DO UPDATE SET
            name = EXCLUDED.name
        RETURNING id;
        ",
    )
    .bind(&station.name)
    .bind(station.latitude())
    .bind(station.longitude())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|id: String| Id::new(id))
}
