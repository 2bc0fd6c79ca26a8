#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rdo() -> Command {
    cargo_bin_cmd!("rdayone")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdayone.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Seconds between the unix epoch and 2001-01-01, the store's convention.
pub const EPOCH_2001_OFFSET: i64 = 978_307_200;

/// Convert a calendar timestamp (UTC) to the epoch-2001 offset the store
/// keeps on disk.
pub fn core_data_ts(date: &str, time: &str) -> f64 {
    use chrono::NaiveDateTime;
    let dt = NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S")
        .expect("fixture timestamp");
    (dt.and_utc().timestamp() - EPOCH_2001_OFFSET) as f64
}

/// Create a fixture store with the table shapes Day One uses.
pub fn create_store(db_path: &str) -> Connection {
    let conn = Connection::open(db_path).expect("open fixture db");
    conn.execute_batch(
        "CREATE TABLE ZJOURNAL (
             Z_PK INTEGER PRIMARY KEY,
             ZNAME TEXT,
             ZUUIDFORAUXILIARYSYNC TEXT
         );
         CREATE TABLE ZENTRY (
             Z_PK INTEGER PRIMARY KEY,
             ZUUID TEXT,
             ZRICHTEXTJSON TEXT,
             ZMARKDOWNTEXT TEXT,
             ZCREATIONDATE REAL,
             ZMODIFIEDDATE REAL,
             ZSTARRED INTEGER,
             ZTIMEZONE TEXT,
             ZJOURNAL INTEGER,
             ZLOCATION INTEGER,
             ZWEATHER INTEGER
         );
         CREATE TABLE ZTAG (
             Z_PK INTEGER PRIMARY KEY,
             ZNAME TEXT
         );
         CREATE TABLE Z_13TAGS (
             Z_13ENTRIES INTEGER,
             Z_55TAGS1 INTEGER
         );",
    )
    .expect("create fixture schema");
    conn
}

pub fn insert_journal(conn: &Connection, pk: i64, name: &str) {
    conn.execute(
        "INSERT INTO ZJOURNAL (Z_PK, ZNAME, ZUUIDFORAUXILIARYSYNC) VALUES (?1, ?2, ?3)",
        rusqlite::params![pk, name, format!("JOURNAL-{pk}")],
    )
    .expect("insert journal");
}

/// Delta-form rich text payload wrapping the given plain text.
pub fn delta_payload(text: &str) -> String {
    serde_json::json!({ "ops": [ { "insert": text } ] }).to_string()
}

/// Insert an entry with full control over the stored row.
#[allow(clippy::too_many_arguments)]
pub fn insert_entry_raw(
    conn: &Connection,
    pk: i64,
    uuid: &str,
    rich: Option<&str>,
    markdown: Option<&str>,
    created: f64,
    journal: Option<i64>,
    starred: bool,
    timezone: Option<&str>,
) {
    conn.execute(
        "INSERT INTO ZENTRY (Z_PK, ZUUID, ZRICHTEXTJSON, ZMARKDOWNTEXT, ZCREATIONDATE,
                             ZMODIFIEDDATE, ZSTARRED, ZTIMEZONE, ZJOURNAL, ZLOCATION, ZWEATHER)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, NULL, NULL)",
        rusqlite::params![
            pk,
            uuid,
            rich,
            markdown,
            created,
            created,
            starred as i64,
            timezone,
            journal,
        ],
    )
    .expect("insert entry");
}

/// Insert a plain entry: delta rich text, not starred, NULL timezone.
pub fn insert_entry(
    conn: &Connection,
    pk: i64,
    uuid: &str,
    text: &str,
    date: &str,
    time: &str,
    journal: Option<i64>,
) {
    let rich = delta_payload(text);
    insert_entry_raw(
        conn,
        pk,
        uuid,
        Some(&rich),
        None,
        core_data_ts(date, time),
        journal,
        false,
        None,
    );
}

pub fn insert_tag(conn: &Connection, pk: i64, name: &str) {
    conn.execute(
        "INSERT INTO ZTAG (Z_PK, ZNAME) VALUES (?1, ?2)",
        rusqlite::params![pk, name],
    )
    .expect("insert tag");
}

pub fn tag_entry(conn: &Connection, entry_pk: i64, tag_pk: i64) {
    conn.execute(
        "INSERT INTO Z_13TAGS (Z_13ENTRIES, Z_55TAGS1) VALUES (?1, ?2)",
        rusqlite::params![entry_pk, tag_pk],
    )
    .expect("tag entry");
}

/// 32-hex-char identifiers like the ones Day One assigns.
pub fn uuid_for(n: u8) -> String {
    format!("{:032X}", n as u128)
}

/// Initialize a store with two journals and a small dataset useful for
/// many tests
pub fn init_store_with_data(db_path: &str) -> Connection {
    let conn = create_store(db_path);

    insert_journal(&conn, 1, "Personal");
    insert_journal(&conn, 2, "Work");

    insert_entry(
        &conn,
        1,
        &uuid_for(1),
        "Morning pages before coffee",
        "2025-09-01",
        "07:30:00",
        Some(1),
    );
    insert_entry(
        &conn,
        2,
        &uuid_for(2),
        "Sprint retro went fine",
        "2025-09-02",
        "18:00:00",
        Some(2),
    );
    insert_entry(
        &conn,
        3,
        &uuid_for(3),
        "Long walk along the river",
        "2025-09-15",
        "20:15:00",
        Some(1),
    );

    conn
}
