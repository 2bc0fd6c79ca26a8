use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single journal entry: a read-only projection of a ZENTRY row with the
/// rich-text payload already normalized to plain text.
#[derive(Debug, Clone, Serialize)]
pub struct JournalEntry {
    pub id: String,                         // ⇔ ZENTRY.ZUUID
    pub created_at: Option<DateTime<Utc>>,  // ⇔ ZENTRY.ZCREATIONDATE (epoch-2001 seconds)
    pub modified_at: Option<DateTime<Utc>>, // ⇔ ZENTRY.ZMODIFIEDDATE (epoch-2001 seconds)
    pub text: String,                       // normalized, never absent
    pub journal_name: String,               // ⇔ ZJOURNAL.ZNAME, "Default" when unjoined
    pub tags: Vec<String>,                  // ⇔ ZTAG via Z_13TAGS
    pub starred: bool,                      // ⇔ ZENTRY.ZSTARRED
    pub timezone: String,                   // ⇔ ZENTRY.ZTIMEZONE, "UTC" when NULL
    pub has_location: bool,                 // ⇔ ZENTRY.ZLOCATION IS NOT NULL
    pub has_weather: bool,                  // ⇔ ZENTRY.ZWEATHER IS NOT NULL
}

impl JournalEntry {
    pub fn created_str(&self) -> String {
        match self.created_at {
            Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
            None => "--".to_string(),
        }
    }

    pub fn modified_str(&self) -> String {
        match self.modified_at {
            Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
            None => "--".to_string(),
        }
    }

    pub fn tags_str(&self) -> String {
        self.tags.join(", ")
    }

    /// Calendar year of creation, when the row carries a creation date.
    pub fn year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.created_at.map(|ts| ts.year())
    }
}

/// Entries created on the same month/day of one calendar year.
/// Years without matches are never materialized as empty groups.
#[derive(Debug, Clone, Serialize)]
pub struct OnThisDayGroup {
    pub year: i32,
    pub entries: Vec<JournalEntry>,
}
