//! Command-line arguments
//!
//! Every setting can also come from a `FYYUR_*` environment variable; both
//! take priority over the config file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fyyur_common::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "fyyur", version, about = "Fyyur venue and artist booking directory")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "FYYUR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Database URL, e.g. sqlite://fyyur.db
    #[arg(long, env = "FYYUR_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Secret key for signing form tokens
    #[arg(long, env = "FYYUR_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Address to bind the HTTP server to
    #[arg(long, env = "FYYUR_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "FYYUR_PORT")]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the web server (default)
    Serve,
    /// Insert the sample venues, artists and shows
    Seed,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            database_url: self.database_url.clone(),
            secret_key: self.secret_key.clone(),
            host: self.host.clone(),
            port: self.port,
        }
    }
}
