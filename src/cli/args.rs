// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

use crate::constants::{DEFAULT_CORS_ORIGIN, DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PORT};

/// Every option falls back to an environment variable, which may also come
/// from a `.env` file in the working directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// SQLite database file holding the Flashcard table
    #[arg(short, long, value_name = "DATABASE", env = "DB_NAME", default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Address to bind to
    #[arg(long, value_name = "HOST", env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, value_name = "PORT", env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Origin allowed to make cross-origin requests
    #[arg(long, value_name = "ORIGIN", env = "CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
