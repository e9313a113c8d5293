use model::{journey::Journey, station::Station, WithId};
use public_transport::database::{DatabaseError, Result};
use sqlx::{Executor, Postgres};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::journey::JourneyStationsRow;

use super::convert_error;

pub async fn insert<'c, E>(
    executor: E,
    from: &Id<Station>,
    to: &Id<Station>,
) -> Result<Id<Journey>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar(
        "
        INSERT INTO journeys(
            from_station_id,
            to_station_id
        )
        VALUES ($1, $2)
        RETURNING id;
        ",
    )
    .bind(from.raw())
    .bind(to.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|id: String| Id::new(id))
}

pub async fn insert_via_station<'c, E>(
    executor: E,
    journey: &Id<Journey>,
    station: &Id<Station>,
    position: i32,
) -> Result<()>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query(
        "
        INSERT INTO journey_via_stations(
            journey_id,
            station_id,
            position
        )
        VALUES ($1, $2, $3);
        ",
    )
    .bind(journey.raw())
    .bind(station.raw())
    .bind(position)
    .execute(executor)
    .await
    .map_err(convert_error)
    .map(|_| ())
}

/// One row per via station (or a single row without via columns), all
/// repeating the journey's endpoints.
pub async fn get<'c, E>(executor: E, id: &Id<Journey>) -> Result<WithId<Journey>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            j.id,
            f.id AS from_id, f.name AS from_name,
            f.latitude AS from_latitude, f.longitude AS from_longitude,
            t.id AS to_id, t.name AS to_name,
            t.latitude AS to_latitude, t.longitude AS to_longitude,
            v.id AS via_id, v.name AS via_name,
            v.latitude AS via_latitude, v.longitude AS via_longitude
        FROM
            journeys j
            JOIN stations f ON f.id = j.from_station_id
            JOIN stations t ON t.id = j.to_station_id
            LEFT JOIN journey_via_stations jv ON jv.journey_id = j.id
            LEFT JOIN stations v ON v.id = jv.station_id
        WHERE
            j.id = $1
        ORDER BY
            jv.position ASC;
        ",
    )
    .bind(id.raw())
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<JourneyStationsRow>| {
        JourneyStationsRow::gather(rows).ok_or(DatabaseError::NotFound)
    })
}
