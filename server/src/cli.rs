//! Command-line flags for `brain-server`.

use std::path::PathBuf;

use clap::Parser;
use config::ConfigOverrides;

#[derive(Parser, Debug, Default)]
#[command(name = "brain-server")]
#[command(about = "Capture endpoint and board for a personal second brain")]
#[command(version)]
pub struct Cli {
    /// TOML or YAML configuration file
    #[arg(short, long, env = "BRAIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind (overrides BRAIN_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides BRAIN_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// The flags as the top configuration layer. Any flag given wins over
    /// file and environment, even when it repeats a default.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            logging_level: self.log_level.clone(),
        }
    }
}
