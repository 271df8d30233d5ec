use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{parse_id, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdRecord {
    pub id: i64,
    pub title: String,
    pub artist: String,
}

impl CdRecord {
    pub fn new(id: i64, title: &str, artist: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
        }
    }
}

/// Ordered in-memory collection of CDs. Insertion order is display order and
/// ids are not required to be unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<CdRecord>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { records: vec![] }
    }

    /// Appends a CD parsed from raw user input. An id that is not an integer
    /// leaves the inventory untouched and is handed back as an error.
    pub fn add(&mut self, id_text: &str, title: &str, artist: &str) -> Result<&CdRecord> {
        let id = match parse_id(id_text) {
            Ok(id) => id,
            Err(e) => {
                warn!("rejected CD with id {:?}: {}", id_text, e);
                return Err(e);
            }
        };

        debug!("adding CD {} \"{}\" by \"{}\"", id, title, artist);
        self.records.push(CdRecord::new(id, title, artist));
        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Removes the first CD carrying `id`. Later duplicates are left alone.
    pub fn delete(&mut self, id: i64) -> Option<CdRecord> {
        let Some(position) = self.records.iter().position(|record| record.id == id) else {
            info!("no CD with id {} to delete", id);
            return None;
        };
        info!("deleting CD {} at position {}", id, position);
        Some(self.records.remove(position))
    }

    pub fn push(&mut self, record: CdRecord) {
        self.records.push(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[CdRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CdRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<CdRecord> for Inventory {
    fn from_iter<I: IntoIterator<Item = CdRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Inventory {
    type Item = CdRecord;
    type IntoIter = std::vec::IntoIter<CdRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a CdRecord;
    type IntoIter = std::slice::Iter<'a, CdRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
