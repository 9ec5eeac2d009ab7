use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use contentrest_storage::SeedData;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "contentrest")]
#[command(about = "Paged catalog listings and asynchronous folder size jobs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// JSON file with `nodes`, `catalog` and `preferences`
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },
    /// Print one page of catalog entries as JSON
    Catalog {
        #[arg(short, long)]
        seed: Option<PathBuf>,
        #[arg(long)]
        skip: Option<usize>,
        #[arg(long)]
        max: Option<usize>,
        /// Comma-separated namespace prefix globs
        #[arg(short, long)]
        prefix: Option<String>,
    },
}

pub(crate) fn load_seed(path: Option<&Path>) -> Result<SeedData> {
    match path {
        Some(path) => Ok(SeedData::from_path(path)?),
        None => {
            tracing::info!("no seed file given, starting empty");
            Ok(SeedData::default())
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, seed } => {
            commands::serve::run(port, host, seed.as_deref()).await?;
        },
        Commands::Catalog { seed, skip, max, prefix } => {
            commands::catalog::run(seed.as_deref(), skip, max, prefix.as_deref()).await?;
        },
    }

    Ok(())
}
