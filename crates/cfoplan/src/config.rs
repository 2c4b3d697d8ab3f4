//! Dashboard configuration.
//!
//! Settings come from an optional `config.yaml` in the data directory. Every
//! field has a default, so a partial file (or none at all) is fine. Command
//! line flags are applied on top by [`AppConfig::with_overrides`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use cfoplan_core::SimulatedFeed;

pub const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seconds between live feed polls
    pub poll_interval_secs: u64,
    /// Simulated feed latency
    pub feed_latency_ms: u64,
    pub feed_min: u32,
    pub feed_max: u32,
    pub initial_sheet_name: String,
    /// Where exported reports are written. Defaults to `<data_dir>/reports`.
    pub export_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 10,
            feed_latency_ms: 2_500,
            feed_min: 5_000,
            feed_max: 25_000,
            initial_sheet_name: "My Startup Budget (INR)".to_string(),
            export_dir: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Read `config.yaml` from `data_dir`. A missing file is not an error.
    pub fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        // An empty document deserializes to nothing; treat it as all defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_saphyr::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Like [`load`](Self::load), but falls back to defaults with a warning
    pub fn load_or_default(data_dir: &Path) -> Self {
        match Self::load(data_dir) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default configuration: {e}");
                Self::default()
            }
        }
    }

    /// Apply command line overrides
    pub fn with_overrides(
        mut self,
        poll_interval_secs: Option<u64>,
        export_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(secs) = poll_interval_secs {
            self.poll_interval_secs = secs;
        }
        if export_dir.is_some() {
            self.export_dir = export_dir;
        }
        self
    }

    /// Poll interval, never shorter than one second
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    /// Build the simulated feed. A reversed range is put back in order.
    pub fn feed(&self) -> SimulatedFeed {
        let (min, max) = if self.feed_min <= self.feed_max {
            (self.feed_min, self.feed_max)
        } else {
            (self.feed_max, self.feed_min)
        };
        SimulatedFeed::new(Duration::from_millis(self.feed_latency_ms), min, max)
    }

    pub fn resolve_export_dir(&self, data_dir: &Path) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| data_dir.join("reports"))
    }
}
