//! Trip store: all SQL touching the `trips` table lives here.

use crate::errors::{AppError, AppResult};
use crate::models::trip::Trip;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const TRIP_COLUMNS: &str = "id, name, category, start_date, end_date, created_at";

fn parse_db_date(idx: usize, raw: Option<String>) -> Result<Option<NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    idx,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidDate(s.clone())),
                )
            }),
    }
}

pub fn map_row(row: &Row) -> Result<Trip> {
    let start_raw: Option<String> = row.get("start_date")?;
    let end_raw: Option<String> = row.get("end_date")?;

    Ok(Trip {
        id: row.get("id")?,
        name: row.get("name")?,
        category: row.get("category")?,
        start_date: parse_db_date(3, start_raw)?,
        end_date: parse_db_date(4, end_raw)?,
        created_at: row.get("created_at")?,
    })
}

/// All trips, start date ascending. Trips without a start date come last;
/// ties keep creation order.
pub fn all_trips(conn: &Connection) -> AppResult<Vec<Trip>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TRIP_COLUMNS} FROM trips
         ORDER BY start_date ASC NULLS LAST, id ASC"
    ))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_trip(conn: &Connection, id: i64) -> AppResult<Option<Trip>> {
    let mut stmt = conn.prepare(&format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Insert `trip` (its `id` is ignored) and return the id SQLite assigned.
pub fn insert_trip(conn: &Connection, trip: &Trip) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO trips (name, category, start_date, end_date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            trip.name,
            trip.category,
            trip.start_str(),
            trip.end_str(),
            trip.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite name, category and dates of an existing trip.
pub fn update_trip(conn: &Connection, trip: &Trip) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE trips
            SET name = ?1, category = ?2, start_date = ?3, end_date = ?4
          WHERE id = ?5",
        params![
            trip.name,
            trip.category,
            trip.start_str(),
            trip.end_str(),
            trip.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::TripNotFound(trip.id));
    }
    Ok(())
}

pub fn delete_trip(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM trips WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::TripNotFound(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn all_trips_sorted_by_start_with_missing_last() {
        let pool = DbPool::in_memory().unwrap();
        let c = &pool.conn;

        insert_trip(c, &Trip::new("no-start", "Business", None, Some(d("2024-02-01")))).unwrap();
        insert_trip(c, &Trip::new("june", "Vacation", Some(d("2024-06-01")), None)).unwrap();
        insert_trip(c, &Trip::new("jan", "Vacation", Some(d("2024-01-01")), None)).unwrap();
        insert_trip(c, &Trip::new("jan-2", "Adventure", Some(d("2024-01-01")), None)).unwrap();

        let names: Vec<String> = all_trips(c).unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["jan", "jan-2", "june", "no-start"]);
    }

    #[test]
    fn store_accepts_anything() {
        let pool = DbPool::in_memory().unwrap();
        let c = &pool.conn;

        let id = insert_trip(
            c,
            &Trip::new("", "", Some(d("2024-06-10")), Some(d("2024-06-01"))),
        )
        .unwrap();
        let blank = insert_trip(c, &Trip::new("", "", None, None)).unwrap();

        let t = find_trip(c, id).unwrap().unwrap();
        assert_eq!(t.name, "");
        assert!(t.start_date > t.end_date);

        let b = find_trip(c, blank).unwrap().unwrap();
        assert_eq!(b.start_date, None);
        assert_eq!(b.end_date, None);
    }

    #[test]
    fn update_keeps_id() {
        let pool = DbPool::in_memory().unwrap();
        let c = &pool.conn;

        let id = insert_trip(c, &Trip::new("Rome", "Business", Some(d("2024-03-01")), None)).unwrap();
        let mut t = find_trip(c, id).unwrap().unwrap();
        t.name = "Rome again".into();
        t.end_date = Some(d("2024-03-04"));
        update_trip(c, &t).unwrap();

        let reloaded = find_trip(c, id).unwrap().unwrap();
        assert_eq!(reloaded.id, id);
        assert_eq!(reloaded.name, "Rome again");
        assert_eq!(reloaded.end_date, Some(d("2024-03-04")));
        assert_eq!(reloaded.created_at, t.created_at);
    }

    #[test]
    fn unknown_id_is_reported() {
        let pool = DbPool::in_memory().unwrap();
        let c = &pool.conn;

        let mut ghost = Trip::new("ghost", "Vacation", None, None);
        ghost.id = 42;

        assert!(matches!(update_trip(c, &ghost), Err(AppError::TripNotFound(42))));
        assert!(matches!(delete_trip(c, 42), Err(AppError::TripNotFound(42))));
        assert!(find_trip(c, 42).unwrap().is_none());
    }

    #[test]
    fn delete_removes_row() {
        let pool = DbPool::in_memory().unwrap();
        let c = &pool.conn;

        let id = insert_trip(c, &Trip::new("Oslo", "Family Visit", None, None)).unwrap();
        delete_trip(c, id).unwrap();
        assert!(all_trips(c).unwrap().is_empty());
    }
}
