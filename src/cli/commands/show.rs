use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::entry_by_uuid;
use crate::db::store::JournalDb;
use crate::errors::AppResult;
use crate::models::entry::JournalEntry;
use crate::ui::messages;
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { uuid } = cmd {
        let db = JournalDb::new(cfg.database.clone());

        match entry_by_uuid(&db, uuid)? {
            Some(entry) => print_entry(&entry),
            None => messages::warning(format!("No entry with UUID {uuid}.")),
        }
    }
    Ok(())
}

fn print_entry(e: &JournalEntry) {
    println!();
    println!("{} {}", Colour::Cyan.bold().paint("Entry"), e.id);
    println!(
        "{} {} ({})",
        Colour::Cyan.paint("Created: "),
        e.created_str(),
        e.timezone
    );
    println!("{} {}", Colour::Cyan.paint("Modified:"), e.modified_str());
    println!("{} {}", Colour::Cyan.paint("Journal: "), e.journal_name);

    if !e.tags.is_empty() {
        println!("{} {}", Colour::Cyan.paint("Tags:    "), e.tags_str());
    }
    if e.starred {
        println!("{} yes", Colour::Yellow.paint("Starred: "));
    }

    let mut extras = Vec::new();
    if e.has_location {
        extras.push("location");
    }
    if e.has_weather {
        extras.push("weather");
    }
    if !extras.is_empty() {
        println!("{} {}", Colour::Cyan.paint("Attached:"), extras.join(", "));
    }

    println!();
    if e.text.is_empty() {
        println!("{}", Colour::Fixed(8).paint("(no text content)"));
    } else {
        println!("{}", textwrap::fill(&e.text, 88));
    }
    println!();
}
