use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "cd_inventory", about = "Keep track of a personal CD collection")]
pub struct CommandLine {
    /// Inventory file. Falls back to $CD_INVENTORY_FILE, then CDInventory.dat.
    #[clap(long, short)]
    pub file: Option<PathBuf>,
    /// Raise log verbosity (-v info, -vv debug).
    #[clap(long, short, action = ArgAction::Count)]
    pub verbose: u8,
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive menu (default).
    Shell,
    /// Print the stored inventory and exit.
    List {
        #[clap(long = "json", action)]
        json: bool,
    },
}
