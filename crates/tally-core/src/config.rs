//! Tracker configuration
//!
//! Config is loaded with a three-layer resolution:
//! 1. An explicit path, when given and present
//! 2. The override in the data dir (~/.local/share/tally/config/tally.toml)
//! 3. Embedded defaults (compiled into the library)
//!
//! Every key is optional; anything missing keeps its default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into the library)
const DEFAULT_CONFIG: &str = include_str!("../../../config/tally.toml");

/// Thresholds for the built-in insight rules
#[derive(Debug, Clone, PartialEq)]
pub struct InsightConfig {
    /// Rounded share of spending the top category must exceed
    pub concentration_percent: u32,
    /// Monthly food spending that must be exceeded
    pub food_threshold: f64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            concentration_percent: 40,
            food_threshold: 200.0,
        }
    }
}

/// Full tracker configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TallyConfig {
    /// Simulated processing delay before parsing a submission
    pub processing_delay: Duration,
    pub insights: InsightConfig,
    /// How many transactions the recent list shows
    pub recent_limit: usize,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(500),
            insights: InsightConfig::default(),
            recent_limit: 10,
        }
    }
}

impl TallyConfig {
    /// Load from the default locations
    pub fn load() -> Result<Self> {
        load_config(None)
    }

    /// Load with an explicit override path
    pub fn load_from(path: &Path) -> Result<Self> {
        load_config(Some(path))
    }

    /// Parse a TOML document on top of the defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }

    /// Defaults with no processing delay (for tests and batch use)
    pub fn immediate() -> Self {
        Self {
            processing_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("tally").join("config").join("tally.toml"))
}

fn read_config(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "Loading config override");
    fs::read_to_string(path)
        .map_err(|e| Error::InvalidData(format!("Failed to read config: {}", e)))
}

/// Load configuration (override first, then default)
fn load_config(override_path: Option<&Path>) -> Result<TallyConfig> {
    let content = match override_path {
        Some(path) if path.exists() => read_config(path)?,
        Some(_) => DEFAULT_CONFIG.to_string(),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path)?,
            _ => DEFAULT_CONFIG.to_string(),
        },
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    processing: Option<RawProcessing>,
    insights: Option<RawInsights>,
    views: Option<RawViews>,
}

#[derive(Debug, Deserialize)]
struct RawProcessing {
    delay_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawInsights {
    concentration_percent: Option<u32>,
    food_threshold: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawViews {
    recent_limit: Option<usize>,
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<TallyConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::InvalidData(format!("Invalid config TOML: {}", e)))?;

    let mut config = TallyConfig::default();

    if let Some(processing) = raw.processing {
        if let Some(delay) = processing.delay_ms {
            config.processing_delay = Duration::from_millis(delay);
        }
    }

    if let Some(insights) = raw.insights {
        if let Some(percent) = insights.concentration_percent {
            config.insights.concentration_percent = percent;
        }
        if let Some(threshold) = insights.food_threshold {
            config.insights.food_threshold = threshold;
        }
    }

    if let Some(views) = raw.views {
        if let Some(limit) = views.recent_limit {
            config.recent_limit = limit;
        }
    }

    Ok(config)
}
