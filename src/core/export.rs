use crate::core::classifier::classify;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::all_trips;
use crate::errors::AppResult;
use crate::export::{ExportFormat, TripExport, ensure_writable, export_csv, export_json};
use crate::models::bucket::Bucket;
use chrono::NaiveDate;
use std::path::Path;

/// Rows to export: every trip in store order, or one bucket of it.
pub fn collect_rows(
    pool: &mut DbPool,
    bucket: Option<Bucket>,
    today: NaiveDate,
) -> AppResult<Vec<TripExport>> {
    let trips = all_trips(&pool.conn)?;

    let rows = match bucket {
        Some(b) => classify(&trips, today)
            .get(b)
            .iter()
            .map(|t| TripExport::from_trip(t, today))
            .collect(),
        None => trips
            .iter()
            .map(|t| TripExport::from_trip(t, today))
            .collect(),
    };

    Ok(rows)
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        bucket: Option<Bucket>,
        today: NaiveDate,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows = collect_rows(pool, bucket, today)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog_soft(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {} trip(s) to {}", rows.len(), path.display()),
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::insert_trip;
    use crate::models::trip::Trip;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn bucket_filter_uses_classifier() {
        let mut pool = DbPool::in_memory().unwrap();
        let c = &pool.conn;
        insert_trip(c, &Trip::new("old", "Business", Some(d("2024-01-01")), Some(d("2024-01-03")))).unwrap();
        insert_trip(c, &Trip::new("now", "Vacation", Some(d("2024-06-01")), Some(d("2024-06-10")))).unwrap();
        insert_trip(c, &Trip::new("blank", "Vacation", None, None)).unwrap();

        let today = d("2024-06-05");

        let all = collect_rows(&mut pool, None, today).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].start_date, "");
        assert_eq!(all[2].buckets, "");

        let past = collect_rows(&mut pool, Some(Bucket::Past), today).unwrap();
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].name, "old");
        assert_eq!(past[0].buckets, "past");
    }
}
