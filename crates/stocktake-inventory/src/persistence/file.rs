//! Loading and saving the inventory file

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{format, PersistenceError, Result};
use crate::store::Inventory;

/// Read the inventory file into a fresh store.
///
/// A missing file is an empty store. A present file must carry the exact
/// header and well-formed rows; any malformed row aborts the load.
pub fn load(path: &Path) -> Result<Inventory> {
    if !path.exists() {
        debug!(path = %path.display(), "inventory file absent, starting empty");
        return Ok(Inventory::new());
    }

    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header == format::HEADER => {}
        Some((_, header)) => {
            return Err(PersistenceError::MalformedRecord {
                line: 1,
                reason: format!("unexpected header {header:?}"),
            });
        }
        None => return Ok(Inventory::new()),
    }

    let mut inventory = Inventory::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let (name, record) = format::parse_row(line, index + 1)?;
        inventory.insert(name, record);
    }

    debug!(path = %path.display(), items = inventory.len(), "inventory loaded");
    Ok(inventory)
}

/// Replace the inventory file with the full serialized store.
///
/// Writes into a sibling temp file, fsyncs, then renames over the target so
/// a crash mid-write cannot truncate the previous contents. Creates the
/// containing directory on first use.
pub fn save(path: &Path, inventory: &Inventory) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_sibling(path);
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&temp_path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", format::HEADER)?;
    for (name, record) in inventory.iter() {
        writeln!(writer, "{}", format::encode_row(name, record))?;
    }
    writer.flush()?;
    writer.get_ref().sync_all()?;

    fs::rename(&temp_path, path)?;

    debug!(path = %path.display(), items = inventory.len(), "inventory saved");
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
