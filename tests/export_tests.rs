use predicates::str::contains;
use std::fs;

mod common;
use common::*;

#[test]
fn export_json_writes_all_entries_newest_first() {
    let db_path = setup_test_db("export_json");
    init_store_with_data(&db_path);
    let out = temp_out("export_json", "json");

    rdo()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("json export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array of entries");

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["uuid"], uuid_for(3).as_str());
    assert_eq!(rows[0]["journal"], "Personal");
    assert_eq!(rows[0]["text"], "Long walk along the river");
    assert!(
        rows[0]["created_at"]
            .as_str()
            .expect("created_at string")
            .starts_with("2025-09-15")
    );
}

#[test]
fn export_csv_writes_header_and_rows() {
    let db_path = setup_test_db("export_csv");
    init_store_with_data(&db_path);
    let out = temp_out("export_csv", "csv");

    rdo()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.starts_with("uuid,created_at,modified_at,journal"));
    assert!(content.contains("Sprint retro went fine"));
}

#[test]
fn export_can_be_filtered_by_search() {
    let db_path = setup_test_db("export_search");
    init_store_with_data(&db_path);
    let out = temp_out("export_search", "json");

    rdo()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--search", "walk",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(parsed.as_array().expect("array").len(), 1);
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let db_path = setup_test_db("export_no_overwrite");
    init_store_with_data(&db_path);
    let out = temp_out("export_no_overwrite", "json");
    fs::write(&out, "occupied").expect("pre-existing file");

    rdo()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    // Untouched.
    assert_eq!(fs::read_to_string(&out).expect("read"), "occupied");
}

#[test]
fn export_overwrites_with_force() {
    let db_path = setup_test_db("export_force");
    init_store_with_data(&db_path);
    let out = temp_out("export_force", "json");
    fs::write(&out, "occupied").expect("pre-existing file");

    rdo()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("Long walk along the river"));
}

#[test]
fn export_with_no_matching_entries_warns() {
    let db_path = setup_test_db("export_empty");
    init_store_with_data(&db_path);
    let out = temp_out("export_empty", "json");

    rdo()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--search",
            "zeppelin",
        ])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}
