use crate::cli::commands::print_entry_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::entries_on_date;
use crate::db::store::JournalDb;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::OnThisDay { date, years } = cmd {
        let db = JournalDb::new(cfg.database.clone());

        let groups = entries_on_date(&db, date, *years)?;

        if groups.is_empty() {
            messages::info(format!(
                "No entries on {date} in the last {years} year(s)."
            ));
            return Ok(());
        }

        for group in &groups {
            let n = group.entries.len();
            messages::header(format!(
                "{} ({} entr{})",
                group.year,
                n,
                if n == 1 { "y" } else { "ies" }
            ));
            print_entry_table(&group.entries, cfg.preview_chars);
            println!();
        }
    }
    Ok(())
}
