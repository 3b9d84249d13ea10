//! Quotation HTTP server.
//!
//! Serves `GET /cotacao`. Each request walks a short chain with a time budget
//! per hop:
//!
//! - `QuotationFetcher` — calls the external USD/BRL API (200 ms by default)
//!   and unwraps the `{"USDBRL": {...}}` envelope.
//! - `QuotationStore` — appends the quotation to the local SQLite file
//!   (10 ms by default).
//! - `handler` — glues both together and answers with the quotation as JSON,
//!   or with an empty `504 Gateway Timeout` when either hop fails.
//!
//! Startup failures (bad external URL, unusable database, port in use) end
//! the process before anything is served. Request failures never do.
#![warn(missing_docs)]
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use quotation_common::net::{QUOTATION_PATH, addr};

use crate::args::Args;
use crate::fetcher::QuotationFetcher;
use crate::state::AppState;
use crate::store::SqliteStore;

mod args;
mod error;
mod fetcher;
mod handler;
mod model;
mod state;
mod store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let args = Args::parse();
    info!("Server application started");

    let store = SqliteStore::open(&args.database).await?;
    info!("{} quotations already stored", store.count().await?);
    if let Some(last) = store.recent(1).await?.pop() {
        info!("Last quotation: {}", last);
    }
    let fetcher = QuotationFetcher::new(&args.quotation_url, args.fetch_timeout())?;

    let state = AppState {
        fetcher,
        store: Arc::new(store.clone()),
        persist_timeout: args.persist_timeout(),
    };
    let app = handler::router(state);

    let listener = tokio::net::TcpListener::bind(addr("0.0.0.0", args.port)).await?;
    info!(
        "Listening on http://{}{}",
        listener.local_addr()?,
        QUOTATION_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Ctrl+C received. Shutting down server...");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
