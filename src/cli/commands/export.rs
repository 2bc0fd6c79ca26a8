use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::{recent_entries, search_entries};
use crate::db::store::JournalDb;
use crate::errors::AppResult;
use crate::export::export_entries;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        search,
        journal,
        limit,
        force,
    } = cmd
    {
        let db = JournalDb::new(cfg.database.clone());
        let journal = journal.as_deref().or(cfg.default_journal.as_deref());

        let entries = match search {
            Some(text) => search_entries(&db, text, *limit, journal)?,
            None => recent_entries(&db, *limit, journal)?,
        };

        if entries.is_empty() {
            messages::warning("Nothing to export.");
            return Ok(());
        }

        export_entries(&entries, format, file, *force)?;
    }
    Ok(())
}
