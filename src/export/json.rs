use crate::export::model::EntryExport;

/// Write the entries as pretty-printed JSON.
pub fn write_json(path: &str, entries: &[EntryExport]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(entries).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}
