use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::stats;
use crate::db::store::JournalDb;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info, check } = cmd {
        let db = JournalDb::new(cfg.database.clone());

        //
        // 1) INFO
        //
        if *info {
            stats::print_db_info(&db)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity = stats::integrity_check(&db)?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        if !*info && !*check {
            messages::info("Nothing to do: pass --info or --check.");
        }
    }
    Ok(())
}
