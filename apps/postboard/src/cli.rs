//! Command-line surface.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use postboard_infra::{ConfigError, HttpResourceConfig};
use postboard_infra::http::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(name = "postboard", version, about = "Edit a remote list of posts", long_about = None)]
pub struct Cli {
    /// Resource root; posts live under `<base-url>/posts`
    #[arg(long, env = "POSTBOARD_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "POSTBOARD_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Log output format (logs go to stderr)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Cli {
    pub fn resource_config(&self) -> Result<HttpResourceConfig, ConfigError> {
        HttpResourceConfig::new(&self.base_url, Duration::from_secs(self.timeout_secs))
    }
}
