use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::delegate::npm::DEFAULT_PROGRAM;
use crate::error::{BumpError, Result};

/// Project-local configuration file name
pub const CONFIG_FILE_NAME: &str = "bumpversion.toml";

/// User-level configuration file name inside the platform config directory
pub const USER_CONFIG_FILE_NAME: &str = ".bumpversion.toml";

/// Represents the complete configuration for bump-version.
///
/// The manifest is always `package.json` in the project root, the only file
/// the external tool rewrites, so only the tool itself is configurable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub delegate: DelegateConfig,
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

/// External tool that persists the new version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DelegateConfig {
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for DelegateConfig {
    fn default() -> Self {
        DelegateConfig {
            program: default_program(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumpversion.toml` in the project root
/// 3. `.bumpversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `root` - Project root searched for a local configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>, root: &Path) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => find_config_file(root),
    };

    let Some(path) = path else {
        debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        BumpError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| BumpError::config(format!("Invalid {}: {}", path.display(), e)))?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    let local = root.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join(USER_CONFIG_FILE_NAME);
    if user.exists() {
        Some(user)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.delegate.program, "npm");
    }

    #[test]
    fn test_delegate_program_from_toml() {
        let config: Config = toml::from_str("[delegate]\nprogram = \"pnpm\"\n").unwrap();
        assert_eq!(config.delegate.program, "pnpm");
    }

    #[test]
    fn test_manifest_location_is_not_configurable() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[manifest]\nfile = \"app/package.json\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
