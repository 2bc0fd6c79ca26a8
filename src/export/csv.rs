use crate::export::model::EntryExport;
use csv::Writer;

/// Write the entries as CSV to the given file.
pub fn write_csv(path: &str, entries: &[EntryExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "uuid",
        "created_at",
        "modified_at",
        "journal",
        "starred",
        "timezone",
        "tags",
        "text",
    ])?;

    for e in entries {
        wtr.write_record(&[
            e.uuid.clone(),
            e.created_at.clone(),
            e.modified_at.clone(),
            e.journal.clone(),
            e.starred.to_string(),
            e.timezone.clone(),
            e.tags.clone(),
            e.text.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
