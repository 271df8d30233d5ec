pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod inventory;
pub mod persistence;
pub mod session;
pub mod shell;

pub use error::{Error, Result};
pub use inventory::{CdRecord, Inventory};
pub use session::Session;
