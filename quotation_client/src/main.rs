//! Quotation Client — asks the quotation server for the current USD/BRL
//! quotation and writes its bid to a text file as `Dólar: <bid>`.
//!
//! Usage example (CLI):
//! ```bash
//! quotation_client --server-url http://localhost:8080/cotacao --output ./cotacao.txt
//! ```
//!
//! The whole request is bounded by `--timeout-ms` (300 ms by default). Any
//! failure is logged and ends the process with exit status 1; a `504` from the
//! server is reported as a quotation request timeout.
#![warn(missing_docs)]
mod args;
mod model;
mod requester;
mod writer;

use crate::args::Args;
use crate::requester::request_quotation;
use crate::writer::save_quotation_file;
use clap::Parser;
use log::{error, info};
use quotation_common::{QuotationError, Result};

/// Request the quotation and persist it to the output file.
async fn run(args: &Args) -> Result<()> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("quotation_client/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let quotation = request_quotation(&client, &args.server_url, args.timeout()).await?;
    save_quotation_file(&args.output, &quotation)?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logger();
    let args = Args::parse();
    info!("Init quotation request...");

    if let Err(e) = run(&args).await {
        error!("{}", failure_message(&e));
        std::process::exit(1);
    }

    info!("Finished!");
}

/// Timeouts, ours or the server's, get a prefix of their own in the log.
fn failure_message(err: &QuotationError) -> String {
    if err.is_timeout() {
        format!("Quotation not received in time: {}", err)
    } else {
        err.to_string()
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
