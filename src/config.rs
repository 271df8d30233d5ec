use std::{env, path::PathBuf};

use crate::cli::CommandLine;

pub const DEFAULT_DATA_FILE: &str = "CDInventory.dat";
pub const DATA_FILE_ENV: &str = "CD_INVENTORY_FILE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_filter: String,
}

impl Config {
    pub fn new(data_file: PathBuf) -> Self {
        Self {
            data_file,
            log_filter: "warn".to_string(),
        }
    }

    /// Command line first, then the environment, then built-in defaults.
    pub fn from_args(args: &CommandLine) -> Self {
        let data_file = args
            .file
            .clone()
            .or_else(|| get_env(DATA_FILE_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let log_filter = match args.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };

        Self {
            data_file,
            log_filter: log_filter.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_DATA_FILE))
    }
}

fn get_env(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
