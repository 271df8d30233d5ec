use std::io::{self, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cd_inventory::{
    cli::{Command, CommandLine},
    config::Config,
    display::{write_inventory, write_json},
    persistence,
    shell::Shell,
    Inventory, Session,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CommandLine::parse();
    let config = Config::from_args(&args);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    match args.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let (mut session, report) = Session::open(config)?;
            info!("{:<12} - {}", "DATA FILE", session.data_file().display());
            println!("{}", report);
            let stdin = io::stdin();
            Shell::new(&mut session, stdin.lock(), io::stdout()).start()?;
        }
        Command::List { json } => {
            info!("{:<12} - {}", "DATA FILE", config.data_file.display());
            let mut inventory = Inventory::new();
            let report = persistence::load(&config.data_file, &mut inventory)?;
            info!("{}", report);

            let mut out = io::stdout().lock();
            if json {
                write_json(&mut out, &inventory)?;
            } else {
                write_inventory(&mut out, &inventory)?;
            }
            out.flush()?;
        }
    }

    Ok(())
}
