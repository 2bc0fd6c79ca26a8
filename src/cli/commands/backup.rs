use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::store::JournalDb;
use crate::errors::{AppError, AppResult};
use crate::utils::path::{expand_tilde, is_absolute};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let dest = expand_tilde(file);
        let dest_str = dest.to_string_lossy().to_string();

        if !is_absolute(&dest_str) {
            return Err(AppError::invalid_input(
                "file",
                "destination must be an absolute path",
            ));
        }

        let db = JournalDb::new(cfg.database.clone());
        BackupLogic::backup(&db, &dest_str, *compress, *force)?;
    }
    Ok(())
}
