use crate::cli::commands::print_entry_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::search_entries;
use crate::db::store::JournalDb;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search {
        text,
        limit,
        journal,
    } = cmd
    {
        let db = JournalDb::new(cfg.database.clone());
        let journal = journal.as_deref().or(cfg.default_journal.as_deref());

        let entries = search_entries(&db, text, *limit, journal)?;

        if entries.is_empty() {
            messages::info(format!("No entries matching '{text}'."));
            return Ok(());
        }

        println!(
            "{} entr{} matching '{}':\n",
            entries.len(),
            if entries.len() == 1 { "y" } else { "ies" },
            text
        );
        print_entry_table(&entries, cfg.preview_chars);
    }
    Ok(())
}
