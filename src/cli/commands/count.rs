use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::entry_count;
use crate::db::store::JournalDb;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Count { journal } = cmd {
        let db = JournalDb::new(cfg.database.clone());
        let journal = journal.as_deref().or(cfg.default_journal.as_deref());

        let count = entry_count(&db, journal)?;

        match journal {
            Some(name) => println!(
                "{}Total entries in journal '{}':{} {}{}{}",
                CYAN, name, RESET, GREEN, count, RESET
            ),
            None => println!(
                "{}Total entries:{} {}{}{}",
                CYAN, RESET, GREEN, count, RESET
            ),
        }
    }
    Ok(())
}
