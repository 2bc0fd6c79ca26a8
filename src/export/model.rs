use crate::models::entry::JournalEntry;
use serde::Serialize;

/// Flat record for export output.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub uuid: String,
    pub created_at: String,
    pub modified_at: String,
    pub journal: String,
    pub starred: bool,
    pub timezone: String,
    pub tags: String,
    pub text: String,
}

impl From<&JournalEntry> for EntryExport {
    fn from(e: &JournalEntry) -> Self {
        Self {
            uuid: e.id.clone(),
            created_at: e
                .created_at
                .map(|ts| ts.to_rfc3339())
                .unwrap_or_default(),
            modified_at: e
                .modified_at
                .map(|ts| ts.to_rfc3339())
                .unwrap_or_default(),
            journal: e.journal_name.clone(),
            starred: e.starred,
            timezone: e.timezone.clone(),
            tags: e.tags_str(),
            text: e.text.clone(),
        }
    }
}
