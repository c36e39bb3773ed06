use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SiftError};

/// Static suppression lists and content-hash tolerance (`[classify]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Path fragments that mark static or editorial content (case-sensitive substring match).
    pub path_fragments: Vec<String>,
    /// Extension tokens that mark static assets; matched as substrings of the extension (with its dot).
    pub extensions: Vec<String>,
    /// Shortest all-hex token still treated as a SHA-256 digest. Digests printed
    /// as integers lose their leading zero nibbles, so this sits a little under 64.
    pub hash_min_len: usize,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            path_fragments: [
                "assets/frontend",
                "assets/static",
                "assets/vendor",
                "/fonts/",
                "article/",
                "/blog/",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            extensions: [
                "jpeg", "png", "svg", "jpg", "ico", "swf", "gif", "woff", "ttf", "scss", "css",
                ".eot",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            hash_min_len: 56,
        }
    }
}

/// HTTP method used by the liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeMethod {
    #[default]
    Head,
    Get,
}

/// Liveness probe settings (`[probe]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub method: ProbeMethod,
    /// Follow redirects and judge the final response.
    pub follow_redirects: bool,
    pub connect_timeout_secs: u64,
    /// Whole-request timeout; hitting it counts as "not confirmed alive".
    pub timeout_secs: u64,
    /// Maximum probes in flight at once.
    pub max_in_flight: usize,
    /// Archive prefix; the original URL is appended verbatim.
    pub archive_prefix: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            method: ProbeMethod::Head,
            follow_redirects: true,
            connect_timeout_secs: 10,
            timeout_secs: 20,
            max_in_flight: 1,
            archive_prefix: "https://web.archive.org/web/20060102150405if_/".to_string(),
        }
    }
}

/// Run configuration. Built-in defaults apply unless a TOML file is passed explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    /// Scheme assumed for inputs like `example.com/path`.
    pub default_scheme: String,
    /// Format string rendered for dedup and classification.
    pub target_format: String,
    pub classify: ClassifyConfig,
    pub probe: ProbeConfig,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            default_scheme: "http".to_string(),
            target_format: "%p".to_string(),
            classify: ClassifyConfig::default(),
            probe: ProbeConfig::default(),
        }
    }
}

impl SiftConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(data: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(data)
    }
}

/// Load configuration from `path`. There is no implicit config location.
pub fn load_from(path: &Path) -> Result<SiftConfig> {
    let data = fs::read_to_string(path).map_err(|e| SiftError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let cfg = SiftConfig::from_toml_str(&data).map_err(|e| SiftError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
