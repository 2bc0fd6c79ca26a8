use crate::db::store::JournalDb;
use crate::errors::AppResult;
use crate::models::journal::JournalStat;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date;
use std::fs;

/// One aggregate row per journal, ordered by name.
pub fn journal_statistics(db: &JournalDb) -> AppResult<Vec<JournalStat>> {
    let conn = db.connect()?;

    let mut stmt = conn.prepare(
        "SELECT j.ZNAME AS name,
                j.ZUUIDFORAUXILIARYSYNC AS uuid,
                COUNT(e.Z_PK) AS entry_count,
                MAX(e.ZCREATIONDATE) AS last_entry
         FROM ZJOURNAL j
         LEFT JOIN ZENTRY e ON e.ZJOURNAL = j.Z_PK
         GROUP BY j.Z_PK, j.ZNAME, j.ZUUIDFORAUXILIARYSYNC
         ORDER BY j.ZNAME",
    )?;

    let rows = stmt.query_map([], |row| {
        let name: Option<String> = row.get("name")?;
        let uuid: Option<String> = row.get("uuid")?;
        let entry_count: i64 = row.get("entry_count")?;
        let last_entry: Option<f64> = row.get("last_entry")?;

        Ok(JournalStat {
            name: name.unwrap_or_else(|| "Default".to_string()),
            uuid,
            entry_count,
            last_entry_at: last_entry.and_then(date::from_core_data),
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn print_db_info(db: &JournalDb) -> AppResult<()> {
    let conn = db.connect()?;
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db.path()).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        db.path().display(),
        RESET
    );
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let entries: i64 = conn.query_row("SELECT COUNT(*) FROM ZENTRY", [], |row| row.get(0))?;
    let journals: i64 = conn.query_row("SELECT COUNT(*) FROM ZJOURNAL", [], |row| row.get(0))?;

    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, entries, RESET
    );
    println!(
        "{}• Journals:{} {}{}{}",
        CYAN, RESET, GREEN, journals, RESET
    );

    //
    // 3) DATE RANGE (stored as epoch-2001 offsets)
    //
    let first: Option<f64> =
        conn.query_row("SELECT MIN(ZCREATIONDATE) FROM ZENTRY", [], |row| {
            row.get(0)
        })?;
    let last: Option<f64> =
        conn.query_row("SELECT MAX(ZCREATIONDATE) FROM ZENTRY", [], |row| {
            row.get(0)
        })?;

    let fmt = |v: Option<f64>| match v.and_then(date::from_core_data) {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => format!("{GREY}--{RESET}"),
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    println!();
    Ok(())
}

pub fn integrity_check(db: &JournalDb) -> AppResult<String> {
    let conn = db.connect()?;
    let result: String = conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    Ok(result)
}
