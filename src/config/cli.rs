use crate::config::toml_config::DemoConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "ruv-demo")]
#[command(about = "Checks the ruv services and walks each through a short demo")]
pub struct CliConfig {
    #[arg(long, help = "TOML file overriding service URLs and demo options")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Per-request timeout in seconds (default 5)")]
    pub timeout_secs: Option<u64>,

    #[arg(long, help = "Append the service info scene")]
    pub with_info: bool,

    #[arg(long, help = "Skip the closing performance summary")]
    pub no_summary: bool,

    #[arg(long, help = "Only run the health checks")]
    pub check_only: bool,

    #[arg(long, help = "Log timing and memory per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the optional file, then lets flags win over it.
    pub fn resolve(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_file(path)?,
            None => DemoConfig::default(),
        };

        if let Some(timeout) = self.timeout_secs {
            config.timeout_seconds = timeout;
        }
        if self.with_info {
            config.include_info = true;
        }
        if self.no_summary {
            config.show_summary = false;
        }

        Ok(config)
    }
}
