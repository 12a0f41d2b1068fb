use crate::adapters::numbers_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use std::time::Duration;

const MAX_FACT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Parser)]
#[command(name = "number-classifier")]
#[command(about = "HTTP service that classifies numbers and attaches a math fact")]
pub struct ServerConfig {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: u16,

    #[arg(long, env = "FACT_API_URL", default_value = DEFAULT_BASE_URL)]
    pub fact_api_url: String,

    #[arg(long, env = "FACT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub fact_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, env = "LOG_JSON", help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ConfigProvider for ServerConfig {
    fn fact_api_url(&self) -> &str {
        &self.fact_api_url
    }

    fn fact_timeout(&self) -> Duration {
        Duration::from_secs(self.fact_timeout_secs)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_url("fact_api_url", &self.fact_api_url)?;
        validate_range("fact_timeout_secs", self.fact_timeout_secs, 1, MAX_FACT_TIMEOUT_SECS)?;
        Ok(())
    }
}
