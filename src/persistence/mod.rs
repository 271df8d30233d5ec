pub mod codec;

use core::fmt;
use std::{
    fs::{self, File, OpenOptions},
    io::{BufReader, BufWriter, ErrorKind},
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::inventory::Inventory;
use codec::{read_entry, write_entry, CodecErr, Frame};

/// Why the read loop of a load stopped.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadStop {
    EndOfFile,
    Truncated,
    Corrupt(CodecErr),
}

#[derive(Debug, PartialEq, Eq)]
pub enum LoadReport {
    /// No inventory file yet. The store was left as it was.
    Missing,
    Loaded { records: usize, stop: LoadStop },
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "No inventory file found, starting with the current inventory."),
            Self::Loaded { records, stop: LoadStop::EndOfFile } => {
                write!(f, "Reached end of File! Loaded {} CD(s).", records)
            }
            Self::Loaded { records, stop: LoadStop::Truncated } => {
                write!(f, "Inventory file ends mid-entry. Loaded {} CD(s) before the damage.", records)
            }
            Self::Loaded { records, stop: LoadStop::Corrupt(e) } => {
                write!(f, "Stopped at a corrupt entry ({}). Loaded {} CD(s) before it.", e, records)
            }
        }
    }
}

/// Replaces the contents of `inventory` with the entries stored at `path`.
///
/// A missing file leaves `inventory` untouched. Otherwise the inventory is
/// refilled in file order until the end of the file, a truncated entry or an
/// undecodable entry, whichever comes first. On an I/O error `inventory` keeps
/// its previous contents.
pub fn load(path: &Path, inventory: &mut Inventory) -> Result<LoadReport> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("inventory file {} not found", path.display());
            return Ok(LoadReport::Missing);
        }
        Err(e) => return Err(e.into()),
    };

    let mut reader = BufReader::new(file);
    let mut loaded = Inventory::new();
    let stop = loop {
        match read_entry(&mut reader) {
            Ok(Frame::Entry(record)) => {
                debug!("loaded CD {}", record.id);
                loaded.push(record);
            }
            Ok(Frame::End) => break LoadStop::EndOfFile,
            Ok(Frame::Truncated) => {
                warn!("{} ends part way through an entry", path.display());
                break LoadStop::Truncated;
            }
            Err(Error::Codec(e)) => {
                warn!("corrupt entry in {}: {}", path.display(), e);
                break LoadStop::Corrupt(e);
            }
            Err(e) => return Err(e),
        }
    };

    *inventory = loaded;
    info!("loaded {} CD(s) from {}", inventory.len(), path.display());
    Ok(LoadReport::Loaded { records: inventory.len(), stop })
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Overwrites `path` with one entry per CD, in inventory order. The entries
/// go to a sibling staging file first which then replaces `path`, so an
/// interrupted save leaves the previous file intact.
pub fn save(path: &Path, inventory: &Inventory) -> Result<usize> {
    let staging = staging_path(path);
    let written = write_all(&staging, inventory).and_then(|n| {
        fs::rename(&staging, path)?;
        Ok(n)
    });

    if written.is_err() && staging.exists() {
        if let Err(e) = fs::remove_file(&staging) {
            warn!("unable to remove staging file {}: {}", staging.display(), e);
        }
    }
    let written = written?;
    info!("saved {} CD(s) to {}", written, path.display());
    Ok(written)
}

fn write_all(path: &Path, inventory: &Inventory) -> Result<usize> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    let mut writer = BufWriter::new(file);
    for record in inventory {
        write_entry(&mut writer, record)?;
    }
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(inventory.len())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::inventory::CdRecord;

    #[test]
    fn staging_path_test() {
        assert_eq!(staging_path(Path::new("CDInventory.dat")), PathBuf::from("CDInventory.dat.tmp"));
        assert_eq!(staging_path(Path::new("/a/b/x.dat")), PathBuf::from("/a/b/x.dat.tmp"));
    }

    #[test]
    fn save_empty_then_load_test() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("x.dat");

        assert_eq!(save(&path, &Inventory::new())?, 0);
        assert_eq!(fs::metadata(&path)?.len(), 0);

        let mut inventory: Inventory = vec![CdRecord::new(9, "Stale", "Entry")].into_iter().collect();
        let report = load(&path, &mut inventory)?;
        assert_eq!(report, LoadReport::Loaded { records: 0, stop: LoadStop::EndOfFile });
        assert!(inventory.is_empty());
        Ok(())
    }

    #[test]
    fn missing_file_test() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut inventory: Inventory = vec![CdRecord::new(1, "Abbey Road", "Beatles")].into_iter().collect();
        let report = load(&dir.path().join("missing.dat"), &mut inventory)?;
        assert_eq!(report, LoadReport::Missing);
        assert_eq!(inventory.records(), &[CdRecord::new(1, "Abbey Road", "Beatles")]);
        Ok(())
    }

    #[test]
    fn save_overwrites_test() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("x.dat");

        let big: Inventory = (1..=5).map(|i| CdRecord::new(i, "Title", "Artist")).collect();
        save(&path, &big)?;
        let small: Inventory = vec![CdRecord::new(7, "Only", "One")].into_iter().collect();
        assert_eq!(save(&path, &small)?, 1);

        let mut loaded = Inventory::new();
        load(&path, &mut loaded)?;
        assert_eq!(loaded, small);
        assert!(!staging_path(&path).exists());
        Ok(())
    }

    #[test]
    fn failed_save_keeps_previous_file_test() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("x.dat");
        let previous: Inventory = vec![CdRecord::new(1, "Abbey Road", "Beatles")].into_iter().collect();
        save(&path, &previous)?;

        fs::create_dir(staging_path(&path))?;
        let newer: Inventory = vec![CdRecord::new(2, "Blue", "Joni Mitchell")].into_iter().collect();
        assert!(matches!(save(&path, &newer), Err(Error::Io(_))));

        let mut loaded = Inventory::new();
        load(&path, &mut loaded)?;
        assert_eq!(loaded, previous);
        Ok(())
    }

    #[test]
    fn failed_load_keeps_inventory_test() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut inventory: Inventory = vec![CdRecord::new(1, "Abbey Road", "Beatles")].into_iter().collect();

        assert!(matches!(load(dir.path(), &mut inventory), Err(Error::Io(_))));
        assert_eq!(inventory.records(), &[CdRecord::new(1, "Abbey Road", "Beatles")]);
        Ok(())
    }

    #[test]
    fn truncated_file_test() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("x.dat");
        let inventory: Inventory = vec![
            CdRecord::new(1, "Abbey Road", "Beatles"),
            CdRecord::new(2, "Blue", "Joni Mitchell"),
        ]
        .into_iter()
        .collect();
        save(&path, &inventory)?;

        let bytes = fs::read(&path)?;
        fs::write(&path, &bytes[..bytes.len() - 4])?;

        let mut loaded = Inventory::new();
        let report = load(&path, &mut loaded)?;
        assert_eq!(report, LoadReport::Loaded { records: 1, stop: LoadStop::Truncated });
        assert_eq!(loaded.records(), &[CdRecord::new(1, "Abbey Road", "Beatles")]);
        Ok(())
    }

    #[test]
    fn corrupt_entry_test() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("x.dat");

        let mut bytes = vec![];
        codec::write_entry(&mut bytes, &CdRecord::new(1, "Abbey Road", "Beatles"))?;
        let bad = b"one,two\n";
        bytes.extend_from_slice(&(bad.len() as u32).to_le_bytes());
        bytes.extend_from_slice(bad);
        codec::write_entry(&mut bytes, &CdRecord::new(3, "Never", "Read"))?;
        fs::write(&path, bytes)?;

        let mut loaded = Inventory::new();
        let report = load(&path, &mut loaded)?;
        assert_eq!(report, LoadReport::Loaded { records: 1, stop: LoadStop::Corrupt(CodecErr::FieldCount(2)) });
        assert_eq!(loaded.len(), 1);
        Ok(())
    }
}
