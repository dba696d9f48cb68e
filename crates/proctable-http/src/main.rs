//! Proctable HTTP server.
//!
//! Serves a snapshot of every process on the host as JSON. Prints
//! `Listening on http://<addr>` once bound and exits after Ctrl-C, letting
//! in-flight requests finish first.

use anyhow::Result;
use clap::Parser;
use proctable_core::{ProcFs, ProcessTable};
use proctable_http::{start_server, Args};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, waiting for in-flight requests");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging; RUST_LOG overrides --debug
    let default_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting proctable HTTP server");

    let port = args.listen_port()?;
    let options = args.scan_options();
    info!(
        "Reading processes from {} (on_error={}, tolerate_cmdline_errors={})",
        args.proc_root.display(),
        options.on_error,
        options.tolerate_cmdline_errors
    );

    let table = ProcessTable::new(ProcFs::with_root(&args.proc_root), options);
    let (addr, server) = start_server(table, &args.host, port, shutdown_signal()).await?;

    // Intentional stdout: scripts and tests read the bound address from here
    println!("Listening on http://{}", addr);

    server.await??;
    info!("Server stopped");

    Ok(())
}
