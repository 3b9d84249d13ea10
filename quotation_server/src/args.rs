//! Command-line arguments for the Quotation Server.
//!
//! Every option defaults to the constants in `quotation_common::net`, so the
//! server runs with no arguments at all.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quotation_common::net::{
    EXTERNAL_QUOTATION_URL, FETCH_TIMEOUT, PERSIST_TIMEOUT, SERVER_PORT,
};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// TCP port to listen on.
    #[clap(long, default_value_t = SERVER_PORT)]
    pub port: u16,

    /// SQLite database file; created if missing.
    #[clap(long, default_value = "./quotations_db.sqlite")]
    pub database: PathBuf,

    /// External endpoint returning the USD/BRL envelope.
    #[clap(long, default_value = EXTERNAL_QUOTATION_URL)]
    pub quotation_url: String,

    /// Budget for the external request, in milliseconds.
    #[clap(long, default_value_t = FETCH_TIMEOUT.as_millis() as u64)]
    pub fetch_timeout_ms: u64,

    /// Budget for the database insert, in milliseconds.
    #[clap(long, default_value_t = PERSIST_TIMEOUT.as_millis() as u64)]
    pub persist_timeout_ms: u64,
}

impl Args {
    /// Budget for the external request.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Budget for the database insert.
    pub fn persist_timeout(&self) -> Duration {
        Duration::from_millis(self.persist_timeout_ms)
    }
}
