use crate::config::Config;
use crate::core::validator::TripDraft;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{find_trip, update_trip};
use crate::errors::{AppError, AppResult};
use crate::models::trip::Trip;
use chrono::NaiveDate;

/// Fields the user asked to change; `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct TripChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

pub struct EditLogic;

impl EditLogic {
    /// Merge `changes` over trip `id`, validate the result and save it.
    ///
    /// A date still missing after the merge becomes `today`.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        id: i64,
        changes: TripChanges,
        today: NaiveDate,
    ) -> AppResult<Trip> {
        let stored = find_trip(&pool.conn, id)?.ok_or(AppError::TripNotFound(id))?;

        let draft = TripDraft {
            name: changes.name.unwrap_or_else(|| stored.name.clone()),
            category: changes.category.unwrap_or_else(|| stored.category.clone()),
            start: changes.start.or(stored.start_date).unwrap_or(today),
            end: changes.end.or(stored.end_date).unwrap_or(today),
        };

        draft.ensure_valid(&cfg.unselected_category)?;

        let updated = Trip {
            name: draft.name,
            category: draft.category,
            start_date: Some(draft.start),
            end_date: Some(draft.end),
            ..stored
        };
        update_trip(&pool.conn, &updated)?;

        ttlog_soft(
            &pool.conn,
            "edit",
            &format!("trip #{id}"),
            &format!(
                "Updated '{}' ({}) {} → {}",
                updated.name, updated.category, draft.start, draft.end
            ),
        );

        Ok(updated)
    }
}
