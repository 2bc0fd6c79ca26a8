use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::env;
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("{}", content);
            } else {
                messages::warning(format!("No configuration file at {}", path.display()));
                messages::info("Run 'rdayone init' to create it.");
            }
        }

        if *edit_config {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "no configuration file at {} (run 'rdayone init' first)",
                    path.display()
                )));
            }

            let editor_cmd = editor
                .clone()
                .or_else(|| env::var("VISUAL").ok())
                .or_else(|| env::var("EDITOR").ok())
                .unwrap_or_else(|| {
                    if cfg!(windows) {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let status = std::process::Command::new(&editor_cmd).arg(&path).status()?;
            if !status.success() {
                return Err(AppError::Config(format!(
                    "editor '{editor_cmd}' exited with failure"
                )));
            }
        }
    }
    Ok(())
}
