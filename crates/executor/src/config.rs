//! Executor configuration via `shipledger.toml`
//!
//! Every setting has a default, so an empty file (or no file at all) gives
//! the legacy-compatible behavior.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::{ResponseFormat, ResultFormatter, TimestampStyle};
use crate::{Error, Result};

/// Config file name looked up by the command-line driver.
pub const CONFIG_FILE_NAME: &str = "shipledger.toml";

/// Default name of the last-inserted-key slot.
pub const DEFAULT_LAST_KEY: &str = "lastKey";

/// The slot recording the most recently inserted key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastKeyConfig {
    /// Record inserted keys in the slot (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Ledger key of the slot (default: `lastKey`)
    #[serde(default = "default_last_key")]
    pub key: String,
}

fn default_enabled() -> bool {
    true
}

fn default_last_key() -> String {
    DEFAULT_LAST_KEY.to_string()
}

impl Default for LastKeyConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            key: default_last_key(),
        }
    }
}

/// Executor configuration loaded from `shipledger.toml`.
///
/// # Example
///
/// ```toml
/// response_format = "legacy"   # "legacy" | "json"
/// timestamp_style = "rfc3339"  # "rfc3339" | "legacy"
///
/// [last_key]
/// enabled = true
/// key = "lastKey"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Layout of range and history payloads.
    #[serde(default)]
    pub response_format: ResponseFormat,
    /// Rendering of history timestamps.
    #[serde(default)]
    pub timestamp_style: TimestampStyle,
    /// Last-inserted-key slot.
    #[serde(default)]
    pub last_key: LastKeyConfig,
}

impl ExecutorConfig {
    /// Slot key inserts record into, or `None` when the slot is disabled
    pub fn last_key_slot(&self) -> Option<&str> {
        self.last_key.enabled.then_some(self.last_key.key.as_str())
    }

    /// Formatter matching this configuration
    pub fn formatter(&self) -> ResultFormatter {
        ResultFormatter::new(self.response_format, self.timestamp_style)
    }

    /// Check settings that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot is enabled with an empty key.
    pub fn validate(&self) -> Result<()> {
        if self.last_key.enabled && self.last_key.key.is_empty() {
            return Err(Error::Config {
                reason: "last_key.key must not be empty when last_key.enabled = true".into(),
            });
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# shipledger executor configuration
#
# Layout of getAll / getHist payloads: "legacy" (default) or "json"
#   "legacy" = the hand-assembled layout existing clients parse
#   "json"   = strictly valid JSON with the same members
response_format = "legacy"

# History timestamps: "rfc3339" (default, UTC) or "legacy" (host timezone)
timestamp_style = "rfc3339"

# Slot recording the most recently inserted key.
[last_key]
enabled = true
key = "lastKey"
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ExecutorConfig = toml::from_str(content).map_err(|e| Error::Config {
            reason: format!("Failed to parse config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { reason } => Error::Config {
                reason: format!("{} ({})", reason, path.display()),
            },
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::Config {
                reason: format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_legacy_compatible() {
        let config = ExecutorConfig::default();
        assert_eq!(config.response_format, ResponseFormat::Legacy);
        assert_eq!(config.timestamp_style, TimestampStyle::Rfc3339);
        assert_eq!(config.last_key_slot(), Some("lastKey"));
    }

    #[test]
    fn default_toml_parses_to_default() {
        let config = ExecutorConfig::from_toml_str(ExecutorConfig::default_toml()).unwrap();
        assert_eq!(config, ExecutorConfig::default());
    }

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(
            ExecutorConfig::from_toml_str("").unwrap(),
            ExecutorConfig::default()
        );
    }

    #[test]
    fn parse_json_format_and_custom_slot() {
        let config = ExecutorConfig::from_toml_str(
            "response_format = \"json\"\n[last_key]\nkey = \"latest\"\n",
        )
        .unwrap();
        assert_eq!(config.response_format, ResponseFormat::Json);
        assert_eq!(config.last_key_slot(), Some("latest"));
    }

    #[test]
    fn disabled_slot_has_no_key() {
        let config = ExecutorConfig::from_toml_str("[last_key]\nenabled = false\n").unwrap();
        assert_eq!(config.last_key_slot(), None);
    }

    #[test]
    fn parse_invalid_format_returns_error() {
        let err = ExecutorConfig::from_toml_str("response_format = \"xml\"").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn empty_slot_key_rejected() {
        assert!(ExecutorConfig::from_toml_str("[last_key]\nkey = \"\"\n").is_err());
        assert!(
            ExecutorConfig::from_toml_str("[last_key]\nenabled = false\nkey = \"\"\n").is_ok()
        );
    }

    #[test]
    fn write_default_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(!path.exists());

        ExecutorConfig::write_default_if_missing(&path).unwrap();
        assert!(path.exists());

        let config = ExecutorConfig::from_file(&path).unwrap();
        assert_eq!(config, ExecutorConfig::default());
    }

    #[test]
    fn write_default_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "response_format = \"json\"\n").unwrap();
        ExecutorConfig::write_default_if_missing(&path).unwrap();

        let config = ExecutorConfig::from_file(&path).unwrap();
        assert_eq!(config.response_format, ResponseFormat::Json);
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = ExecutorConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
