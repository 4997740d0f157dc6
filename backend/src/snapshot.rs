use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::SyncResult;
use crate::models::ContentSnapshot;

/// Pretty JSON with a trailing newline. Field order is fixed by the record
/// types, so the same snapshot always renders to the same bytes.
pub fn render(snapshot: &ContentSnapshot) -> SyncResult<String> {
    let mut rendered = serde_json::to_string_pretty(snapshot)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Replaces the file at `path` in one step: the snapshot is written to a
/// temporary file next to it and renamed over the old one.
pub fn write(path: &Path, snapshot: &ContentSnapshot) -> SyncResult<()> {
    let rendered = render(snapshot)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(rendered.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path)?;
    Ok(())
}

pub fn read(path: &Path) -> SyncResult<ContentSnapshot> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
