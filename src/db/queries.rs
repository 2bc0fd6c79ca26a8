use crate::core::richtext;
use crate::db::store::JournalDb;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{JournalEntry, OnThisDayGroup};
use crate::utils::date::{self, MonthDay};
use chrono::Datelike;
use regex::Regex;
use rusqlite::{Connection, OptionalExtension, Row};
use std::sync::OnceLock;

/// Listing queries accept 1..=MAX_LIMIT rows; anything outside the bound
/// is rejected as invalid input, never clamped.
pub const MAX_LIMIT: u32 = 50;

/// `on-this-day` scans at most a century of calendar years.
pub const MAX_YEARS_BACK: u32 = 100;

const ENTRY_COLUMNS: &str = "e.ZUUID AS uuid, \
     e.ZRICHTEXTJSON AS rich_text, \
     e.ZMARKDOWNTEXT AS markdown_text, \
     e.ZCREATIONDATE AS created, \
     e.ZMODIFIEDDATE AS modified, \
     e.ZSTARRED AS starred, \
     e.ZTIMEZONE AS timezone, \
     j.ZNAME AS journal_name, \
     e.ZLOCATION AS location, \
     e.ZWEATHER AS weather";

pub fn validate_limit(limit: u32) -> AppResult<u32> {
    if (1..=MAX_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(AppError::invalid_input(
            "limit",
            format!("must be between 1 and {MAX_LIMIT}, got {limit}"),
        ))
    }
}

/// Map one joined ZENTRY row to a normalized entry. Tags are attached in a
/// second pass once the row scan is complete.
pub fn map_row(row: &Row) -> rusqlite::Result<JournalEntry> {
    let rich: Option<String> = row.get("rich_text")?;
    let markdown: Option<String> = row.get("markdown_text")?;
    let created: Option<f64> = row.get("created")?;
    let modified: Option<f64> = row.get("modified")?;
    let starred: Option<i64> = row.get("starred")?;
    let timezone: Option<String> = row.get("timezone")?;
    let journal: Option<String> = row.get("journal_name")?;
    let location: Option<i64> = row.get("location")?;
    let weather: Option<i64> = row.get("weather")?;

    Ok(JournalEntry {
        id: row.get("uuid")?,
        created_at: created.and_then(date::from_core_data),
        modified_at: modified.and_then(date::from_core_data),
        text: richtext::entry_text(rich.as_deref(), markdown.as_deref()),
        journal_name: journal.unwrap_or_else(|| "Default".to_string()),
        tags: Vec::new(),
        starred: starred.unwrap_or(0) != 0,
        timezone: timezone.unwrap_or_else(|| "UTC".to_string()),
        has_location: location.is_some(),
        has_weather: weather.is_some(),
    })
}

/// Tags for one entry. The numeric join-table name is generated per schema
/// version by Core Data; on a store generation where it differs the query
/// fails and the entry simply carries no tags.
pub fn entry_tags(conn: &Connection, uuid: &str) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT t.ZNAME
         FROM ZTAG t
         JOIN Z_13TAGS zt ON t.Z_PK = zt.Z_55TAGS1
         JOIN ZENTRY e ON zt.Z_13ENTRIES = e.Z_PK
         WHERE e.ZUUID = ?1",
    )?;

    let rows = stmt.query_map([uuid], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn attach_tags(conn: &Connection, entries: &mut [JournalEntry]) {
    for entry in entries.iter_mut() {
        entry.tags = entry_tags(conn, &entry.id).unwrap_or_default();
    }
}

/// Up to `limit` entries, newest first, optionally restricted to one journal.
pub fn recent_entries(
    db: &JournalDb,
    limit: u32,
    journal: Option<&str>,
) -> AppResult<Vec<JournalEntry>> {
    let limit = validate_limit(limit)?;
    let conn = db.connect()?;

    let mut sql = format!(
        "SELECT {ENTRY_COLUMNS}
         FROM ZENTRY e
         LEFT JOIN ZJOURNAL j ON e.ZJOURNAL = j.Z_PK"
    );

    let mut params: Vec<&dyn rusqlite::ToSql> = Vec::new();
    if let Some(name) = &journal {
        sql.push_str(" WHERE j.ZNAME = ?");
        params.push(name);
    }
    sql.push_str(" ORDER BY e.ZCREATIONDATE DESC LIMIT ?");
    params.push(&limit);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    attach_tags(&conn, &mut out);
    Ok(out)
}

/// Entries whose normalized text contains `needle`, case-insensitively,
/// newest first, capped at `limit`.
///
/// Matching runs on the normalized text in memory rather than SQL LIKE
/// over the raw payload: a needle spanning two rich-text runs never
/// appears contiguously in the stored JSON, and attribute names inside
/// the payload would false-positive.
pub fn search_entries(
    db: &JournalDb,
    needle: &str,
    limit: u32,
    journal: Option<&str>,
) -> AppResult<Vec<JournalEntry>> {
    let limit = validate_limit(limit)? as usize;

    let needle = needle.trim();
    if needle.is_empty() {
        return Err(AppError::invalid_input("search text", "must not be empty"));
    }
    let needle_lower = needle.to_lowercase();

    let conn = db.connect()?;

    let mut sql = format!(
        "SELECT {ENTRY_COLUMNS}
         FROM ZENTRY e
         LEFT JOIN ZJOURNAL j ON e.ZJOURNAL = j.Z_PK"
    );

    let mut params: Vec<&dyn rusqlite::ToSql> = Vec::new();
    if let Some(name) = &journal {
        sql.push_str(" WHERE j.ZNAME = ?");
        params.push(name);
    }
    sql.push_str(" ORDER BY e.ZCREATIONDATE DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        let entry = r?;
        if entry.text.to_lowercase().contains(&needle_lower) {
            out.push(entry);
            if out.len() == limit {
                break;
            }
        }
    }

    attach_tags(&conn, &mut out);
    Ok(out)
}

/// Entries created on the given month/day across the `years_back` most
/// recent calendar years, grouped by year (newest year first). The anchor
/// year comes from the argument when given as YYYY-MM-DD, otherwise from
/// today's date.
pub fn entries_on_date(
    db: &JournalDb,
    month_day: &str,
    years_back: u32,
) -> AppResult<Vec<OnThisDayGroup>> {
    let md = date::parse_month_day(month_day)?;
    let anchor = md.anchor_year.unwrap_or_else(|| date::today().year());
    entries_on_date_anchored(db, md, years_back, anchor)
}

/// Anchored variant: scans exactly `years_back` calendar years ending at
/// `anchor_year` inclusive. Years with zero matches are omitted from the
/// result, not returned as empty groups.
pub fn entries_on_date_anchored(
    db: &JournalDb,
    md: MonthDay,
    years_back: u32,
    anchor_year: i32,
) -> AppResult<Vec<OnThisDayGroup>> {
    if !(1..=MAX_YEARS_BACK).contains(&years_back) {
        return Err(AppError::invalid_input(
            "years",
            format!("must be between 1 and {MAX_YEARS_BACK}, got {years_back}"),
        ));
    }

    let conn = db.connect()?;

    let mut conditions: Vec<&str> = Vec::new();
    let mut windows: Vec<f64> = Vec::new();
    for year in (anchor_year - years_back as i32 + 1)..=anchor_year {
        // Feb 29 outside leap years: no window for that year.
        if let Some((start, end)) = date::day_window_core_data(year, md.month, md.day) {
            conditions.push("(e.ZCREATIONDATE >= ? AND e.ZCREATIONDATE < ?)");
            windows.push(start);
            windows.push(end);
        }
    }

    if conditions.is_empty() {
        return Ok(Vec::new());
    }

    let sql = format!(
        "SELECT {ENTRY_COLUMNS}
         FROM ZENTRY e
         LEFT JOIN ZJOURNAL j ON e.ZJOURNAL = j.Z_PK
         WHERE {}
         ORDER BY e.ZCREATIONDATE DESC",
        conditions.join(" OR ")
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(windows.iter()), map_row)?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }
    attach_tags(&conn, &mut entries);

    // Creation-desc order makes each year's rows contiguous, so a single
    // fold produces the groups, newest year first.
    let mut groups: Vec<OnThisDayGroup> = Vec::new();
    for entry in entries {
        let Some(year) = entry.year() else { continue };
        match groups.last_mut() {
            Some(g) if g.year == year => g.entries.push(entry),
            _ => groups.push(OnThisDayGroup {
                year,
                entries: vec![entry],
            }),
        }
    }

    Ok(groups)
}

fn uuid_shape() -> &'static Regex {
    static UUID_SHAPE: OnceLock<Regex> = OnceLock::new();
    UUID_SHAPE.get_or_init(|| Regex::new(r"^[0-9A-Fa-f-]{8,36}$").expect("static pattern"))
}

/// Full single-entry lookup; `None` when the identifier is unknown.
pub fn entry_by_uuid(db: &JournalDb, uuid: &str) -> AppResult<Option<JournalEntry>> {
    let id = uuid.trim();
    if !uuid_shape().is_match(id) {
        return Err(AppError::invalid_input(
            "uuid",
            format!("'{uuid}' does not look like an entry identifier"),
        ));
    }

    let conn = db.connect()?;

    let sql = format!(
        "SELECT {ENTRY_COLUMNS}
         FROM ZENTRY e
         LEFT JOIN ZJOURNAL j ON e.ZJOURNAL = j.Z_PK
         WHERE e.ZUUID = ?1"
    );

    let mut stmt = conn.prepare(&sql)?;
    let entry = stmt.query_row([id], map_row).optional()?;

    match entry {
        Some(mut e) => {
            e.tags = entry_tags(&conn, &e.id).unwrap_or_default();
            Ok(Some(e))
        }
        None => Ok(None),
    }
}

/// Total entries, optionally scoped to one journal.
pub fn entry_count(db: &JournalDb, journal: Option<&str>) -> AppResult<i64> {
    let conn = db.connect()?;

    let count = match journal {
        Some(name) => conn.query_row(
            "SELECT COUNT(*)
             FROM ZENTRY e
             JOIN ZJOURNAL j ON e.ZJOURNAL = j.Z_PK
             WHERE j.ZNAME = ?1",
            [name],
            |row| row.get(0),
        )?,
        None => conn.query_row("SELECT COUNT(*) FROM ZENTRY", [], |row| row.get(0))?,
    };

    Ok(count)
}
