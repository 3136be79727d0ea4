use crate::config::Config;
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "gpuprices", about = "GPU price-comparison data service")]
pub struct Cli {
    /// SQLite database path (overrides PRICES_DB)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Acquisition service host:port (overrides DATA_ACQUISITION_IP)
    #[arg(long, global = true)]
    pub acquisition_host: Option<String>,

    /// Acquisition request timeout in seconds (overrides DATA_ACQUISITION_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub acquisition_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Listen address (overrides PRICES_BIND)
        #[arg(long)]
        bind: Option<String>,
        /// Do not seed demo data into an empty database
        #[arg(long)]
        no_seed: bool,
    },
    /// Fetch prices from the acquisition service once and print the report
    Refresh,
    /// Seed demo products and source urls into empty tables
    Seed,
}

impl Cli {
    /// Applies command-line overrides on top of an environment-derived config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(db) = &self.db {
            config.db_path = db.clone();
        }
        if let Some(host) = &self.acquisition_host {
            config.acquisition_host = host.clone();
        }
        if let Some(secs) = self.acquisition_timeout {
            config.acquisition_timeout = Duration::from_secs(secs);
        }
        if let Commands::Serve { bind, no_seed } = &self.command {
            if let Some(bind) = bind {
                config.bind = bind.clone();
            }
            if *no_seed {
                config.seed = false;
            }
        }
        config
    }
}
