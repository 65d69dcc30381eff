//! Service configuration read from the environment

use std::env;

/// Environment variable naming the listener address.
const BIND_ADDR_VAR: &str = "WAYLOG_BIND_ADDR";

/// HTTP service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the listener binds to
    pub bind_addr: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(), // loopback only unless configured
        }
    }
}

impl ApiConfig {
    /// Read configuration from the environment, keeping defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(addr) = env::var(BIND_ADDR_VAR) {
            config.bind_addr = addr;
        }
        config
    }
}
