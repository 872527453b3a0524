#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br";
pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub connect_timeout_seconds: u64,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_seconds: DEFAULT_CONNECT_TIMEOUT_SECONDS,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("client.base_url", &self.base_url)?;
        validate_positive_number(
            "client.connect_timeout_seconds",
            self.connect_timeout_seconds,
            1,
        )?;
        validate_positive_number("client.timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
