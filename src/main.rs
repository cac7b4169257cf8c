mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use date_matrix::api;
use date_matrix::config::ServerConfig;
use tokio::net::TcpListener;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    logging::init(cli.verbose, config.environment);

    if cli.print_config {
        println!("Effective configuration:\n{}", serde_yaml::to_string(&config)?);
        return Ok(());
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config),
        Command::Grid { date } => print_grid(&date),
    }
}

fn serve(config: &ServerConfig) -> Result<()> {
    tracing::info!(
        environment = %config.environment,
        workers = config.workers,
        "Calendar App starting"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    runtime.block_on(async {
        let listener = TcpListener::bind(config.bind_addr)
            .await
            .with_context(|| format!("failed to bind {}", config.bind_addr))?;
        api::serve(listener, shutdown_signal()).await?;
        Ok::<(), anyhow::Error>(())
    })
}

fn print_grid(date: &str) -> Result<()> {
    let grid = date_matrix::build(date)?;
    println!("{}", serde_json::to_string(&grid)?);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("HTTP server shutting down gracefully");
}
