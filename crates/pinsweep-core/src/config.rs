//! Configuration for sweep timing and target-page recognition
//!
//! Loaded from `.pinsweep/config.toml` when present; every field has a
//! default so a missing file or empty table is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{PinsweepError, Result};

/// Sweep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Fixed delay between queue steps, in milliseconds
    #[serde(default = "default_check_delay_ms")]
    pub check_delay_ms: u64,

    /// Settling delay after injecting the page agent, in milliseconds
    #[serde(default = "default_inject_settle_ms")]
    pub inject_settle_ms: u64,

    /// Substring the surface URL must contain to be a target site
    #[serde(default = "default_host_marker")]
    pub host_marker: String,

    /// Path markers, at least one of which a product-page URL must contain
    #[serde(default = "default_path_markers")]
    pub path_markers: Vec<String>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            check_delay_ms: default_check_delay_ms(),
            inject_settle_ms: default_inject_settle_ms(),
            host_marker: default_host_marker(),
            path_markers: default_path_markers(),
        }
    }
}

impl SweepConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content)
            .map_err(|e| PinsweepError::Config(format!("Invalid config file: {}", e)))
    }

    /// Load from the given path if it exists, otherwise use defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

// Default value providers
fn default_check_delay_ms() -> u64 {
    5000
}

fn default_inject_settle_ms() -> u64 {
    500
}

fn default_host_marker() -> String {
    "flipkart.com".to_string()
}

fn default_path_markers() -> Vec<String> {
    vec!["/p/".to_string(), "/dl/".to_string(), "pid=".to_string()]
}
