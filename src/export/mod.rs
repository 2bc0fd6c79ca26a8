mod csv;
mod json;
mod model;

pub use model::EntryExport;

use crate::errors::{AppError, AppResult};
use crate::models::entry::JournalEntry;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the given entries to `file` in `format`. Refuses to overwrite an
/// existing file unless `force` is set.
pub fn export_entries(
    entries: &[JournalEntry],
    format: &ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<()> {
    let path = Path::new(file);

    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "file '{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let flat: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();

    match format {
        ExportFormat::Csv => csv::write_csv(file, &flat)?,
        ExportFormat::Json => json::write_json(file, &flat)?,
    }

    notify_export_success(format.as_str(), path);
    Ok(())
}
