//! # Ferrous Tunnel
//!
//! Flow and DoH telemetry for the tunnel, driven from recorded sessions.

mod bootstrap;
mod di;
mod replay;

use anyhow::Context;
use clap::{Parser, Subcommand};
use ferrous_tunnel_application::services::status_taxonomy::STATUS_TABLE;
use ferrous_tunnel_domain::CliOverrides;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "ferrous-tunnel")]
#[command(version)]
#[command(about = "Flow and DoH telemetry for the Ferrous tunnel")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Feed a JSON-lines recording of tunnel callbacks through the listener
    Replay {
        /// Recording to replay, `-` for stdin
        input: PathBuf,
    },
    /// Print the raw DoH status → transaction status table
    Taxonomy,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        CliOverrides {
            log_level: cli.log_level.clone(),
        },
    )?;
    bootstrap::init_logging(&config);
    bootstrap::log_config(&config, cli.config.as_deref());

    match cli.command {
        Command::Replay { input } => run_replay(&config, &input).await,
        Command::Taxonomy => {
            for (raw, status) in STATUS_TABLE {
                println!("{:>3} -> {}", raw, status.as_str());
            }
            Ok(())
        }
    }
}

async fn run_replay(config: &ferrous_tunnel_domain::Config, input: &Path) -> anyhow::Result<()> {
    let di::Container {
        listener,
        mut telemetry,
        repositories,
    } = di::Container::build(config);

    let stats = if input == Path::new("-") {
        replay::replay(&listener, io::stdin().lock())?
    } else {
        let file = File::open(input)
            .with_context(|| format!("Failed to open recording '{}'", input.display()))?;
        replay::replay(&listener, BufReader::new(file))?
    };

    // Closing the producers lets the consumer drain and exit.
    drop(listener);
    telemetry.shutdown().await?;

    info!(
        flows = stats.flows,
        queries = stats.queries,
        history_total = repositories.history.total(),
        "Replay complete"
    );

    let summary =
        replay::ReplaySummary::collect(stats, &telemetry.metrics, &repositories.history);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
