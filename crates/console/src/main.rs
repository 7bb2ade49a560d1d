// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod console;
mod create;
mod menu;
mod render;
mod reports;
mod search;
mod update;

#[cfg(test)]
mod tests;

use clap::Parser;
use poise_persistence::Persistence;
use std::process::ExitCode;
use tracing::{error, info};

use crate::console::{ConsoleError, StdConsole};
use crate::menu::FlowError;

/// Poise PMS - interactive project manager for a small construction firm
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an
    /// in-memory database.
    #[arg(short, long, conflicts_with = "mysql_url")]
    database: Option<String>,

    /// MySQL/MariaDB connection URL for the project store.
    #[arg(long, env = "POISE_DATABASE_URL")]
    mysql_url: Option<String>,
}

fn open_store(args: &Args) -> Result<Persistence, poise_persistence::PersistenceError> {
    if let Some(url) = &args.mysql_url {
        info!("Using MySQL project store");
        Persistence::new_with_mysql(url)
    } else if let Some(path) = &args.database {
        info!("Using file-based database at: {}", path);
        Persistence::new_with_file(path)
    } else {
        info!("Using in-memory database; records are discarded at exit");
        Persistence::new_in_memory()
    }
}

fn main() -> ExitCode {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Poise PMS console");

    // A connection failure at startup is the only fatal error path: print a
    // diagnostic and exit without entering the menu loop.
    let mut store: Persistence = match open_store(&args) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Error connecting to the project store !");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut console = StdConsole;
    let result = menu::run_session(&mut store, &mut console);

    let exit_code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(FlowError::Console(ConsoleError::InputClosed)) => {
            info!("Console input closed; ending session");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Session ended abnormally");
            ExitCode::FAILURE
        }
    };

    if let Err(err) = store.close() {
        error!(error = %err, "Failed to close the project store");
        return ExitCode::FAILURE;
    }

    exit_code
}
