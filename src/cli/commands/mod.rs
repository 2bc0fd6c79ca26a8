pub mod backup;
pub mod config;
pub mod count;
pub mod db;
pub mod export;
pub mod init;
pub mod journals;
pub mod on_this_day;
pub mod recent;
pub mod search;
pub mod show;

use crate::models::entry::JournalEntry;
use crate::utils::formatting::{preview, star_marker, truncate_width};
use crate::utils::table::{Column, Table};

/// Shared listing table for `recent`, `search` and `on-this-day`.
pub(crate) fn print_entry_table(entries: &[JournalEntry], preview_chars: usize) {
    let mut table = Table::new(vec![
        Column::new("CREATED", 16),
        Column::new("JOURNAL", 12),
        Column::new("★", 2),
        Column::new("TAGS", 18),
        Column::new("PREVIEW", preview_chars),
        Column::new("UUID", 32),
    ]);

    for e in entries {
        table.add_row(vec![
            e.created_str(),
            truncate_width(&e.journal_name, 12),
            star_marker(e.starred).to_string(),
            truncate_width(&e.tags_str(), 18),
            preview(&e.text, preview_chars),
            e.id.clone(),
        ]);
    }

    print!("{}", table.render());
}
