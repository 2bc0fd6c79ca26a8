use crate::config::Config;
use crate::db::stats::journal_statistics;
use crate::db::store::JournalDb;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::truncate_width;
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let db = JournalDb::new(cfg.database.clone());

    let stats = journal_statistics(&db)?;

    if stats.is_empty() {
        messages::info("No journals found.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("JOURNAL", 20),
        Column::new("ENTRIES", 8),
        Column::new("LAST ENTRY", 10),
    ]);

    let mut total = 0;
    for s in &stats {
        total += s.entry_count;
        table.add_row(vec![
            truncate_width(&s.name, 20),
            s.entry_count.to_string(),
            colorize_optional(&s.last_entry_str()),
        ]);
    }

    print!("{}", table.render());
    println!();
    println!(
        "{} journal(s), {} entr{} total",
        stats.len(),
        total,
        if total == 1 { "y" } else { "ies" }
    );

    Ok(())
}
