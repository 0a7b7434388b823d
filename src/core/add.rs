use crate::config::Config;
use crate::core::validator::TripDraft;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::insert_trip;
use crate::errors::AppResult;
use crate::models::trip::Trip;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate `draft` and store it as a new trip. Returns the new id.
    pub fn apply(pool: &mut DbPool, cfg: &Config, draft: TripDraft) -> AppResult<i64> {
        draft.ensure_valid(&cfg.unselected_category)?;

        let trip = Trip::new(
            draft.name,
            draft.category,
            Some(draft.start),
            Some(draft.end),
        );
        let id = insert_trip(&pool.conn, &trip)?;

        ttlog_soft(
            &pool.conn,
            "add",
            &format!("trip #{id}"),
            &format!(
                "Added '{}' ({}) {} → {}",
                trip.name, trip.category, draft.start, draft.end
            ),
        );

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::{all_trips, find_trip};
    use crate::errors::AppError;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn stores_valid_trip() {
        let mut pool = DbPool::in_memory().unwrap();
        let cfg = Config::default();

        let id = AddLogic::apply(
            &mut pool,
            &cfg,
            TripDraft {
                name: "Yosemite".into(),
                category: "Vacation".into(),
                start: d("2024-06-01"),
                end: d("2024-06-10"),
            },
        )
        .unwrap();

        let t = find_trip(&pool.conn, id).unwrap().unwrap();
        assert_eq!(t.name, "Yosemite");
        assert_eq!(t.start_date, Some(d("2024-06-01")));
    }

    #[test]
    fn invalid_draft_never_reaches_store() {
        let mut pool = DbPool::in_memory().unwrap();
        let cfg = Config::default();

        let err = AddLogic::apply(
            &mut pool,
            &cfg,
            TripDraft {
                name: "Yosemite".into(),
                category: "Select".into(),
                start: d("2024-06-01"),
                end: d("2024-06-10"),
            },
        )
        .unwrap_err();

        assert!(matches!(err, AppError::InvalidSubmission(_)));
        assert!(all_trips(&pool.conn).unwrap().is_empty());
    }
}
