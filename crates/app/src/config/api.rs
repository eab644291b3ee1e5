//! REST Backend Config

use std::time::Duration;

use clap::Args;

use crate::client::ApiClientConfig;

/// REST backend settings.
#[derive(Debug, Clone, Args)]
pub struct ApiConfig {
    /// REST backend base address
    #[arg(long, env = "TILL_API_URL", default_value = "http://localhost:3000")]
    pub api_url: String,

    /// Bearer token sent with every request
    #[arg(long, env = "TILL_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "TILL_API_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub api_timeout_seconds: u64,
}

impl ApiConfig {
    /// Client settings derived from this configuration.
    #[must_use]
    pub fn client_config(&self) -> ApiClientConfig {
        ApiClientConfig {
            base_url: self.api_url.clone(),
            token: self
                .api_token
                .clone()
                .filter(|token| !token.trim().is_empty()),
            timeout: Duration::from_secs(self.api_timeout_seconds),
        }
    }
}
