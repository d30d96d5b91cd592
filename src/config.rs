//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/relcat/relcat.toml`
//! 3. Environment variables: `RELCAT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub taxonomy_file: Option<PathBuf>,
    pub ledger_dir: Option<PathBuf>,
}

/// Unified configuration for relcat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Custom taxonomy TOML file (default: built-in taxonomy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy_file: Option<PathBuf>,
    /// Directory for bare ledger file names (default: ~/.relcat/ledgers)
    pub ledger_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            taxonomy_file: None,
            ledger_dir: dirs_default_ledger_dir(),
        }
    }
}

/// Get the default ledger directory (~/.relcat/ledgers).
fn dirs_default_ledger_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".relcat").join("ledgers"))
        .unwrap_or_else(|| PathBuf::from("~/.relcat/ledgers"))
}

/// Get the XDG config directory for relcat.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "relcat").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("relcat.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.ledger_dir.to_string_lossy().as_ref());
        self.ledger_dir = PathBuf::from(expanded);

        if let Some(path) = &self.taxonomy_file {
            self.taxonomy_file = Some(PathBuf::from(expand_env_vars(
                path.to_string_lossy().as_ref(),
            )));
        }
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            taxonomy_file: overlay
                .taxonomy_file
                .clone()
                .or_else(|| self.taxonomy_file.clone()),
            ledger_dir: overlay
                .ledger_dir
                .clone()
                .unwrap_or_else(|| self.ledger_dir.clone()),
        }
    }

    /// Load settings with layered precedence from the default global location.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `config_file` as the global config layer.
    ///
    /// A missing file is skipped; a malformed one is an error.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config file
        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path fields
        current.expand_paths();

        Ok(current)
    }

    /// Apply RELCAT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("RELCAT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("taxonomy_file") {
            settings.taxonomy_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("ledger_dir") {
            settings.ledger_dir = PathBuf::from(val);
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# relcat configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/relcat/relcat.toml
#   Env:    RELCAT_* environment variables (explicit overrides)

# Custom taxonomy: nested TOML tables, string values are relationship labels.
# Unset means the built-in taxonomy.
# taxonomy_file = "~/.relcat/taxonomy.toml"

# Directory for ledger files given as bare names (e.g. "john.toml")
# ledger_dir = "~/.relcat/ledgers"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None).expect("load defaults");
        assert!(settings.ledger_dir.to_string_lossy().contains(".relcat"));
    }

    #[test]
    fn given_tilde_in_paths_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            taxonomy_file: Some(PathBuf::from("~/tax.toml")),
            ledger_dir: PathBuf::from("~/.relcat/ledgers"),
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(settings.ledger_dir.to_string_lossy().starts_with(&home));
        assert!(settings
            .taxonomy_file
            .unwrap()
            .to_string_lossy()
            .starts_with(&home));
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let base = Settings {
            taxonomy_file: Some(PathBuf::from("/base.toml")),
            ledger_dir: PathBuf::from("/base/ledgers"),
        };
        let overlay = RawSettings {
            taxonomy_file: None,
            ledger_dir: Some(PathBuf::from("/overlay/ledgers")),
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.taxonomy_file, Some(PathBuf::from("/base.toml")));
        assert_eq!(merged.ledger_dir, PathBuf::from("/overlay/ledgers"));
    }

    #[test]
    fn given_template_when_parsing_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("valid toml");
        assert!(raw.taxonomy_file.is_none());
        assert!(raw.ledger_dir.is_none());
    }
}
