//! pytac configuration system
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. User-level ($XDG_CONFIG_HOME/pytac/config.toml or ~/.config/pytac/config.toml)
//! 3. Default values
//! ```
//!
//! ```toml
//! [compile]
//! tab_width = 4
//! predeclare_classes = true
//!
//! [log]
//! level = "debug"
//!
//! [diagnostics]
//! colors = false
//! ```

use crate::frontend::config::CompileConfig;
use crate::util::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

/// User-level configuration for pytac
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UserConfig {
    /// Front-end settings
    #[serde(default)]
    pub compile: CompileConfig,
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
    /// Diagnostic rendering settings
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Diagnostic rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Colored error output
    #[serde(default = "default_colors")]
    pub colors: bool,
}

fn default_colors() -> bool {
    true
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { colors: true }
    }
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    // Try XDG config directory on Unix
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("pytac"));
    }

    // Fallback to ~/.config/pytac
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("pytac"));
    }

    // On Windows, try %APPDATA%
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("pytac"));
    }

    None
}

/// Get the user config file path (~/.config/pytac/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load user-level configuration
/// Returns default config if file doesn't exist
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    match get_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(UserConfig::default()),
    }
}

/// Load configuration from an explicit file
pub fn load_config_from(path: &Path) -> Result<UserConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::IoError)?;
    parse_config(&content)
}

/// Parse configuration text; missing sections and keys take their defaults
pub fn parse_config(content: &str) -> Result<UserConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::ParseError)
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Config parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
