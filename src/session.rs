use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::inventory::{CdRecord, Inventory};
use crate::persistence::{self, LoadReport};
use crate::shell::Host;

/// Everything one run of the program works on: the configuration and the
/// single in-memory inventory.
#[derive(Debug)]
pub struct Session {
    config: Config,
    inventory: Inventory,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            inventory: Inventory::new(),
        }
    }

    /// Starts a session with whatever the configured data file holds.
    pub fn open(config: Config) -> Result<(Self, LoadReport)> {
        let mut session = Self::new(config);
        let report = session.reload()?;
        Ok((session, report))
    }

    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }
}

impl Host for Session {
    fn reload(&mut self) -> Result<LoadReport> {
        info!("loading inventory from {}", self.config.data_file.display());
        persistence::load(&self.config.data_file, &mut self.inventory)
    }

    fn add(&mut self, id_text: &str, title: &str, artist: &str) -> Result<CdRecord> {
        self.inventory.add(id_text, title, artist).cloned()
    }

    fn delete(&mut self, id: i64) -> Option<CdRecord> {
        self.inventory.delete(id)
    }

    fn save(&mut self) -> Result<usize> {
        persistence::save(&self.config.data_file, &self.inventory)
    }

    fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}
