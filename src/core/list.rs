use crate::config::Config;
use crate::core::classifier::classify;
use crate::db::pool::DbPool;
use crate::db::queries::all_trips;
use crate::errors::AppResult;
use crate::models::bucket::Bucket;
use crate::models::trip::Trip;
use crate::ui::messages::{header, info};
use crate::utils::date::format_day;
use crate::utils::table::Table;
use chrono::NaiveDate;

const HEADERS: [&str; 6] = ["ID", "Name", "Category", "Start", "End", "Days"];

fn trip_row(trip: &Trip, date_format: &str) -> Vec<String> {
    vec![
        trip.id.to_string(),
        trip.name.clone(),
        trip.category.clone(),
        trip.start_display(date_format),
        trip.end_display(date_format),
        trip.duration_days()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".into()),
    ]
}

/// Render one group of trips as a table.
pub fn render_trips(trips: &[&Trip], date_format: &str) -> String {
    let mut table = Table::new(&HEADERS);
    for t in trips {
        table.add_row(trip_row(t, date_format));
    }
    table.render()
}

/// Flat table in store order, with the buckets each trip falls into.
pub fn render_all(trips: &[Trip], today: NaiveDate, date_format: &str) -> String {
    let mut headers = HEADERS.to_vec();
    headers.push("Bucket");

    let mut table = Table::new(&headers);
    for t in trips {
        let buckets: Vec<&str> = Bucket::ALL
            .iter()
            .filter(|b| b.contains(t, today))
            .map(|b| b.as_str())
            .collect();

        let mut row = trip_row(t, date_format);
        row.push(if buckets.is_empty() {
            "-".to_string()
        } else {
            buckets.join(",")
        });
        table.add_row(row);
    }
    table.render()
}

pub struct ListLogic;

impl ListLogic {
    pub fn print(
        pool: &mut DbPool,
        cfg: &Config,
        today: NaiveDate,
        only: Option<Bucket>,
        all: bool,
    ) -> AppResult<()> {
        let trips = all_trips(&pool.conn)?;

        if trips.is_empty() {
            info("No trips yet. Add one with `triplog add <NAME> --category <CATEGORY>`.");
            return Ok(());
        }

        println!("📋 Trips as of {}", format_day(today, &cfg.date_format));

        if all {
            println!();
            print!("{}", render_all(&trips, today, &cfg.date_format));
            return Ok(());
        }

        let buckets = classify(&trips, today);

        let wanted: Vec<Bucket> = match only {
            Some(b) => vec![b],
            None => Bucket::ALL.to_vec(),
        };

        for bucket in wanted {
            let group = buckets.get(bucket);
            header(bucket.title(), group.len());

            if group.is_empty() {
                println!("  (none)");
            } else {
                print!("{}", render_trips(group, &cfg.date_format));
            }
        }

        let skipped = buckets.unclassified(&trips).len();
        if only.is_none() && skipped > 0 {
            println!();
            info(format!(
                "{skipped} trip(s) have no usable date range and are not grouped. Use --all to see them."
            ));
        }

        Ok(())
    }
}
