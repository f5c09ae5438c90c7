//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/budget-tree/budget.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `BUDGET_*` prefix
//!
//! Settings only shape how a budget is displayed and checked; budgets
//! themselves are never read from configuration.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{BreakdownStyle, PriceFormat};

/// Environment variable prefix for overrides (`BUDGET_INDENT`, ...).
pub const ENV_PREFIX: &str = "BUDGET";

/// Largest accepted `price_decimals`; f64 carries at most 17 significant digits.
pub const MAX_PRICE_DECIMALS: usize = 17;

/// Unified configuration for budget-tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Indentation appended per tree level in breakdowns (default: one tab)
    pub indent: String,
    /// Fixed number of decimals for prices; unset renders the shortest form
    pub price_decimals: Option<usize>,
    /// Reject empty names and negative or non-finite prices before rendering
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent: "\t".into(),
            price_decimals: None,
            strict: false,
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub indent: Option<String>,
    pub price_decimals: Option<usize>,
    pub strict: Option<bool>,
}

/// Get the XDG config directory for budget-tree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "budget-tree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("budget.toml"))
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
    /// Breakdown layout derived from these settings.
    pub fn breakdown_style(&self) -> BreakdownStyle {
        BreakdownStyle {
            indent_unit: self.indent.clone(),
            prices: match self.price_decimals {
                Some(decimals) => PriceFormat::Fixed(decimals),
                None => PriceFormat::Shortest,
            },
        }
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            indent: overlay
                .indent
                .clone()
                .unwrap_or_else(|| self.indent.clone()),
            price_decimals: overlay.price_decimals.or(self.price_decimals),
            strict: overlay.strict.unwrap_or(self.strict),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; unlike
    ///   the global file it must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path();
        Self::load_layered(
            global.as_deref(),
            explicit,
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Load settings from the given layers.
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    pub fn load_layered(
        global: Option<&Path>,
        explicit: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config file
        if let Some(path) = explicit {
            debug!("loading config: {}", path.display());
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current, env)?;

        current.check_ranges()?;
        Ok(current)
    }

    fn check_ranges(&self) -> Result<(), ApplicationError> {
        match self.price_decimals {
            Some(decimals) if decimals > MAX_PRICE_DECIMALS => Err(ApplicationError::Config {
                message: format!(
                    "price_decimals must be at most {MAX_PRICE_DECIMALS}: {decimals}"
                ),
            }),
            _ => Ok(()),
        }
    }

    /// Apply BUDGET_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("indent") {
            settings.indent = val;
        }
        match config.get_int("price_decimals") {
            Ok(val) => {
                let decimals = usize::try_from(val).map_err(|_| ApplicationError::Config {
                    message: format!("price_decimals must not be negative: {val}"),
                })?;
                settings.price_decimals = Some(decimals);
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        match config.get_bool("strict") {
            Ok(val) => settings.strict = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
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
        r#"# budget-tree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/budget-tree/budget.toml
#   File:   --config <path>
#   Env:    BUDGET_* environment variables (explicit overrides)

# Indentation appended per level in the breakdown
# indent = "\t"

# Fixed number of decimals for prices (unset: shortest form, e.g. 75000.0)
# price_decimals = 2

# Reject empty names and negative prices before printing
# strict = false
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
