pub mod query;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mDNS question planner, query builder, and dispatcher for service discovery
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to the configuration file
    #[arg(
        short,
        long,
        default_value = "/etc/mdns-querier/mdns-querier.toml",
        env = "CONFIG_PATH"
    )]
    config_path: PathBuf,
    #[command(subcommand)]
    inner: Commands,
}

impl Args {
    pub async fn run(self) {
        let config = crate::config::QuerierConfig::load(&self.config_path);
        match self.inner {
            Commands::Query(inner) => inner.run(config).await,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    Query(query::Command),
}
