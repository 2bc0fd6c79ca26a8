use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-journal aggregate returned by `db::stats::journal_statistics`.
#[derive(Debug, Clone, Serialize)]
pub struct JournalStat {
    pub name: String,                          // ⇔ ZJOURNAL.ZNAME
    pub uuid: Option<String>,                  // ⇔ ZJOURNAL.ZUUIDFORAUXILIARYSYNC
    pub entry_count: i64,                      // COUNT(ZENTRY.Z_PK)
    pub last_entry_at: Option<DateTime<Utc>>,  // MAX(ZENTRY.ZCREATIONDATE), converted
}

impl JournalStat {
    pub fn last_entry_str(&self) -> String {
        match self.last_entry_at {
            Some(ts) => ts.format("%Y-%m-%d").to_string(),
            None => "--".to_string(),
        }
    }
}
