use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;
use commands::{cmd_generate, cmd_init, cmd_inspect, cmd_ping};

/// bungen command-line interface.
#[derive(Parser, Debug)]
#[command(name = "bungen", author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one Go bun model file per table.
    Generate {
        /// Override the configured connection string for this run.
        #[arg(long = "connection-string")]
        connection_string: Option<String>,
        /// Override the configured output directory for this run.
        #[arg(long = "output-dir")]
        output_dir: Option<PathBuf>,
    },
    /// Print the introspected schema without writing files.
    Inspect {
        /// Override the configured connection string for this run.
        #[arg(long = "connection-string")]
        connection_string: Option<String>,
        /// Emit the schema as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Verify database connectivity.
    Ping {
        /// Override the configured connection string for this run.
        #[arg(long = "connection-string")]
        connection_string: Option<String>,
    },
    /// Initialize bungen.json with defaults.
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            connection_string,
            output_dir,
        } => cmd_generate(connection_string, output_dir).await,
        Commands::Inspect {
            connection_string,
            json,
        } => cmd_inspect(connection_string, json).await,
        Commands::Ping { connection_string } => cmd_ping(connection_string).await,
        Commands::Init => cmd_init(),
    }
}
