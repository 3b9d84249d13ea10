//! Command-line arguments for the Quotation Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quotation_common::net::{CLIENT_TIMEOUT, SERVER_QUOTATION_URL};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Full URL of the server's quotation endpoint.
    #[clap(long, default_value = SERVER_QUOTATION_URL)]
    pub server_url: String,

    /// Budget for the whole request, in milliseconds.
    #[clap(long, default_value_t = CLIENT_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,

    /// File receiving the `Dólar: <bid>` line; overwritten on every run.
    #[clap(long, default_value = "cotacao.txt")]
    pub output: PathBuf,
}

impl Args {
    /// Budget for the whole request.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
