//! CLI configuration: built-in defaults, then the environment, then flags.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use chaincall_rpc::{HttpClientConfig, DEFAULT_BLOCK, DEFAULT_REQUEST_ID};

use crate::logging::LogConfig;

/// Environment variable holding the default JSON-RPC endpoint.
pub const RPC_URL_ENV: &str = "CHAINCALL_RPC_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// JSON-RPC endpoint used by `call` and `interactive`
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Block tag passed as the second `eth_call` parameter
    #[serde(default = "default_block")]
    pub block: String,
    #[serde(default = "default_request_id")]
    pub request_id: u64,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub log: LogConfig,
}

fn default_rpc_url() -> String {
    "http://localhost:8545".into()
}

fn default_block() -> String {
    DEFAULT_BLOCK.into()
}

fn default_request_id() -> u64 {
    DEFAULT_REQUEST_ID
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            block: default_block(),
            request_id: default_request_id(),
            timeout_secs: default_timeout_secs(),
            log: LogConfig::default(),
        }
    }
}

impl CliConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Overlay values from an environment lookup. Empty values are ignored.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(RPC_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.rpc_url = url.trim().to_string();
        }
        self
    }

    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            request_timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
