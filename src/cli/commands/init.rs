use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file, pointing at the Day One database
///
/// The database itself is owned by the Day One app and is never created
/// or modified here.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rdayone…");

    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }

    Ok(())
}
