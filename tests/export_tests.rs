mod common;
use common::{init_db_with_data, setup_test_db, temp_out, tl};
use std::fs;

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all", "csv");

    tl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--today", "2024-06-05",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,category,start_date,end_date,buckets,created_at")
    );
    assert!(content.contains("Ski week,Adventure,2024-01-01,2024-01-05,past"));
    assert!(content.contains("Lisbon,Vacation,2024-06-01,2024-06-10,current"));
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_export_json_single_bucket() {
    let db_path = setup_test_db("export_json_bucket");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_bucket", "json");

    tl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--bucket", "upcoming",
        "--today", "2024-06-05",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Conference");
    assert_eq!(rows[0]["buckets"], "upcoming");
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_data(&db_path);

    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").expect("seed file");

    tl().args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    tl().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Lisbon"));
}
