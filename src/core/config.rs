//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.nucleus/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NucleusConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub persistence: PersistenceConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_page: Option<String>,
    pub data_dir: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PersistenceConfig {
    pub save_interval_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub reset_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub swipe_threshold: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SAVE_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_LAYOUT_RESET_MS: u64 = 100;
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 8;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` = first registered page.
    pub start_page: Option<String>,
    pub data_dir: PathBuf,
    /// Keep everything in memory; nothing is read from or written to disk.
    pub ephemeral: bool,
    pub log_level: LevelFilter,
    pub save_interval: Duration,
    pub layout_reset_interval: Duration,
    pub swipe_threshold: u16,
}

/// Flags given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub start_page: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub ephemeral: bool,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.nucleus/`.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".nucleus"))
}

/// Returns the path to `~/.nucleus/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    home_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.nucleus/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NucleusConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NucleusConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NucleusConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<NucleusConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(NucleusConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: NucleusConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Nucleus Configuration
# All settings are optional; defaults apply to anything left out.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_page = "communities"         # Or set NUCLEUS_START_PAGE
# data_dir = "/home/me/worlds"       # Or set NUCLEUS_DATA_DIR; default ~/.nucleus
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"

# [persistence]
# save_interval_secs = 5

# [layout]
# reset_interval_ms = 100

# [input]
# swipe_threshold = 8                # Columns a mouse drag must travel to count as a swipe
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &NucleusConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Start page: CLI → env → config → first page
    let start_page = cli
        .start_page
        .clone()
        .or_else(|| std::env::var("NUCLEUS_START_PAGE").ok())
        .or_else(|| config.general.start_page.clone());

    // Data directory: CLI → env → config → ~/.nucleus
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| std::env::var("NUCLEUS_DATA_DIR").ok().map(PathBuf::from))
        .or_else(|| config.general.data_dir.as_ref().map(PathBuf::from))
        .or_else(home_dir)
        .unwrap_or_else(|| PathBuf::from(".nucleus"));

    // Log level: CLI → config → debug
    let log_level = match cli.log_level.as_deref().or(config.general.log_level.as_deref()) {
        Some(level) => parse_level(level).unwrap_or_else(|| {
            warn!("Unknown log level {level:?}, using {DEFAULT_LOG_LEVEL}");
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        start_page,
        data_dir,
        ephemeral: cli.ephemeral,
        log_level,
        save_interval: Duration::from_secs(
            config
                .persistence
                .save_interval_secs
                .unwrap_or(DEFAULT_SAVE_INTERVAL_SECS)
                .max(1),
        ),
        layout_reset_interval: Duration::from_millis(
            config
                .layout
                .reset_interval_ms
                .unwrap_or(DEFAULT_LAYOUT_RESET_MS)
                .max(10),
        ),
        swipe_threshold: config
            .input
            .swipe_threshold
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD)
            .max(1),
    }
}
