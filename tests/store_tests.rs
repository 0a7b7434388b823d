//! Trips written straight into the store, bypassing the submission check,
//! the way an external writer could.

use chrono::NaiveDate;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use triplog::core::classifier::classify;
use triplog::db::pool::DbPool;
use triplog::db::queries::{all_trips, insert_trip};
use triplog::models::trip::Trip;

mod common;
use common::{init_db, setup_test_db, tl};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_show_missing_dates() {
    let db_path = setup_test_db("show_missing_dates");
    init_db(&db_path);

    {
        let pool = DbPool::new(&db_path).expect("open db");
        insert_trip(&pool.conn, &Trip::new("Someday", "Adventure", None, None)).expect("insert");
    }

    tl().args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Someday"))
        .stdout(contains("Not set"))
        .stdout(contains("Status").not());

    tl().args(["--db", &db_path, "list", "--today", "2024-06-05"])
        .assert()
        .success()
        .stdout(contains("1 trip(s) have no usable date range"));
}

#[test]
fn test_inverted_trip_lands_in_two_groups() {
    let db_path = setup_test_db("inverted_trip");
    init_db(&db_path);

    {
        let pool = DbPool::new(&db_path).expect("open db");
        insert_trip(
            &pool.conn,
            &Trip::new("Backwards", "Business", Some(d("2024-07-01")), Some(d("2024-05-01"))),
        )
        .expect("insert");

        let trips = all_trips(&pool.conn).expect("load");
        let buckets = classify(&trips, d("2024-06-05"));
        assert!(buckets.current.is_empty());
        assert_eq!(buckets.upcoming.len(), 1);
        assert_eq!(buckets.past.len(), 1);
    }

    tl().args(["--db", &db_path, "list", "--today", "2024-06-05"])
        .assert()
        .success()
        .stdout(contains("Upcoming trips (1)"))
        .stdout(contains("Past trips (1)"))
        .stdout(contains("Current trips (0)"));
}

#[test]
fn test_all_trips_puts_missing_start_last() {
    let db_path = setup_test_db("missing_start_last");
    init_db(&db_path);

    let pool = DbPool::new(&db_path).expect("open db");
    insert_trip(&pool.conn, &Trip::new("undated", "Vacation", None, Some(d("2024-01-01"))))
        .expect("insert");
    insert_trip(&pool.conn, &Trip::new("dated", "Vacation", Some(d("2030-01-01")), None))
        .expect("insert");

    let names: Vec<String> = all_trips(&pool.conn)
        .expect("load")
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["dated", "undated"]);
}
