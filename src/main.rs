mod cli;
mod client;
mod config;
mod flags;
mod get;
mod model;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{CliArgs, Command};
use client::TcpMirrorClient;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args.log_filter)?;

    let config = config::load(args.kubeconfig.as_deref())?;

    match args.command {
        Command::Get {
            resource,
            kubectl_command,
        } => {
            debug!("get {resource:?} via mirror at {}", args.address);
            let client = TcpMirrorClient::new(args.address);
            let mut stdout = std::io::stdout();
            get::run_get(&client, &config, &resource, &kubectl_command, &mut stdout).await?;
        }
    }

    Ok(())
}

fn init_tracing(level_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level_filter)
        .or_else(|_| EnvFilter::try_new("info"))
        .context("failed to initialize tracing filter")?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();

    Ok(())
}
