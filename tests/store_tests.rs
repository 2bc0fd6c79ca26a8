use predicates::str::contains;
use std::fs;

mod common;
use common::*;

#[test]
fn every_operation_fails_cleanly_when_the_store_is_missing() {
    let db_path = setup_test_db("store_missing");

    let cases: Vec<Vec<&str>> = vec![
        vec!["recent"],
        vec!["search", "anything"],
        vec!["on-this-day", "06-14"],
        vec!["journals"],
        vec!["count"],
        vec!["db", "--info"],
    ];

    for args in cases {
        let mut cmd = rdo();
        cmd.args(["--db", &db_path]);
        cmd.args(&args);
        cmd.assert()
            .failure()
            .stderr(contains("Journal database unavailable"))
            .stderr(contains("run at least once"));
    }
}

#[test]
fn show_reports_the_missing_store_too() {
    let db_path = setup_test_db("store_missing_show");

    rdo()
        .args(["--db", &db_path, "show", &uuid_for(1)])
        .assert()
        .failure()
        .stderr(contains("Journal database unavailable"));
}

#[test]
fn db_info_reports_totals_and_range() {
    let db_path = setup_test_db("store_info");
    init_store_with_data(&db_path);

    rdo()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total entries:"))
        .stdout(contains("Journals:"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"));
}

#[test]
fn db_check_passes_on_a_healthy_store() {
    let db_path = setup_test_db("store_check");
    init_store_with_data(&db_path);

    rdo()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn db_without_flags_hints_at_usage() {
    let db_path = setup_test_db("store_noflags");
    init_store_with_data(&db_path);

    rdo()
        .args(["--db", &db_path, "db"])
        .assert()
        .success()
        .stdout(contains("--info or --check"));
}

#[test]
fn backup_copies_the_store_aside() {
    let db_path = setup_test_db("store_backup");
    init_store_with_data(&db_path);
    let dest = temp_out("store_backup", "sqlite");

    rdo()
        .args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(fs::metadata(&dest).expect("backup exists").len() > 0);
    // Source untouched and still queryable.
    rdo()
        .args(["--db", &db_path, "count"])
        .assert()
        .success();
}

#[test]
fn backup_can_compress_to_zip() {
    let db_path = setup_test_db("store_backup_zip");
    init_store_with_data(&db_path);
    let dest = temp_out("store_backup_zip", "sqlite");
    let zipped = temp_out("store_backup_zip", "zip");

    rdo()
        .args([
            "--db", &db_path, "backup", "--file", &dest, "--compress", "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(std::path::Path::new(&zipped).exists());
}

#[test]
fn backup_requires_an_absolute_destination() {
    let db_path = setup_test_db("store_backup_rel");
    init_store_with_data(&db_path);

    rdo()
        .args(["--db", &db_path, "backup", "--file", "relative.sqlite"])
        .assert()
        .failure()
        .stderr(contains("Invalid file"));
}

#[test]
fn backup_of_a_missing_store_is_unavailable() {
    let db_path = setup_test_db("store_backup_missing");
    let dest = temp_out("store_backup_missing", "sqlite");

    rdo()
        .args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .failure()
        .stderr(contains("Journal database unavailable"));
}

#[test]
fn init_in_test_mode_reports_the_database_path() {
    let db_path = setup_test_db("store_init");

    rdo()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database"));
}
