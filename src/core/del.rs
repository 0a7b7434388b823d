use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_trip, find_trip};
use crate::errors::{AppError, AppResult};
use crate::models::trip::Trip;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove trip `id` and return what was deleted.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<Trip> {
        let trip = find_trip(&pool.conn, id)?.ok_or(AppError::TripNotFound(id))?;

        delete_trip(&pool.conn, id)?;

        ttlog_soft(
            &pool.conn,
            "del",
            &format!("trip #{id}"),
            &format!("Deleted '{}'", trip.name),
        );

        Ok(trip)
    }
}
