//! Proxy rewriting configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Failure to load a [`ProxyConfig`] from TOML.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Named, overridable knobs for the URL rewriter.
///
/// The defaults route everything external through `cdn.example.io` and leave
/// loopback hosts alone. Missing fields in a TOML file fall back to these
/// defaults field by field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Endpoint prefix proxied URLs are appended to, percent-encoded, e.g.
    /// `https://cdn.example.io/proxy/v1?url=`.
    pub proxy_base_url: String,
    /// Hostnames never proxied. Compared for exact equality, never by suffix.
    pub allow_hosts: Vec<String>,
    /// Exempt loopback hosts (`localhost`, 127.0.0.0/8, `::1`) from proxying.
    pub skip_loopback: bool,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            proxy_base_url: "https://cdn.example.io/proxy/v1?url=".to_string(),
            allow_hosts: vec!["cdn.example.io".to_string()],
            skip_loopback: true,
        }
    }
}

impl ProxyConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(data)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let cfg = toml::from_str(&data)?;
        tracing::debug!(path = %path.display(), "loaded proxy config");
        Ok(cfg)
    }

    /// Returns true if `host` exactly matches an allow-list entry.
    pub fn is_allowed_host(&self, host: &str) -> bool {
        self.allow_hosts.iter().any(|allowed| allowed == host)
    }
}
