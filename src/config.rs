//! Accessor configuration.

use serde::{Deserialize, Serialize};

use crate::error::UrlError;

/// Settings applied when a URL is rebuilt from request context.
///
/// ```
/// use requrl::AccessorConfig;
///
/// let config = AccessorConfig::from_toml_str("suppressed_ports = [80, 443, 8080]").unwrap();
/// assert!(config.is_suppressed(8080));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessorConfig {
    /// Ports left out of the rebuilt URL.
    pub suppressed_ports: Vec<u16>,
}

impl Default for AccessorConfig {
    fn default() -> Self {
        Self {
            suppressed_ports: vec![443, 80],
        }
    }
}

impl AccessorConfig {
    /// Parse a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, UrlError> {
        Ok(toml::from_str(s)?)
    }

    /// Whether `port` should be dropped from a rebuilt URL.
    pub fn is_suppressed(&self, port: u16) -> bool {
        self.suppressed_ports.contains(&port)
    }
}
