use crate::cli::commands::print_entry_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::recent_entries;
use crate::db::store::JournalDb;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recent { limit, journal } = cmd {
        let db = JournalDb::new(cfg.database.clone());
        let journal = journal.as_deref().or(cfg.default_journal.as_deref());

        let entries = recent_entries(&db, *limit, journal)?;

        if entries.is_empty() {
            match journal {
                Some(name) => messages::info(format!("No entries in journal '{name}'.")),
                None => messages::info("No entries found."),
            }
            return Ok(());
        }

        print_entry_table(&entries, cfg.preview_chars);
    }
    Ok(())
}
