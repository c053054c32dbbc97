//! Configuration management utilities.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs_next::config_dir;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DEFAULT_CONFIG: Lazy<&'static str> =
    Lazy::new(|| include_str!("../../assets/default-config.toml"));
static DEFAULT_WORKSPACE_CONFIG_PATH: &str = ".spanpack/config.toml";

/// Layered configuration loaded from defaults, user, workspace, and env.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub units: Units,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Number of fractional digits used when rendering measurements.
    #[serde(default = "Defaults::default_precision")]
    pub precision: usize,
    /// Whether destructive commands (remove, reset) ask for confirmation.
    #[serde(default = "Defaults::default_confirm_destructive")]
    pub confirm_destructive: bool,
}

impl Defaults {
    fn default_precision() -> usize {
        1
    }

    fn default_confirm_destructive() -> bool {
        true
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            precision: Self::default_precision(),
            confirm_destructive: Self::default_confirm_destructive(),
        }
    }
}

/// Unit labels appended to rendered measurements. Display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Units {
    #[serde(default = "Units::default_volume")]
    pub volume: String,
    #[serde(default = "Units::default_weight")]
    pub weight: String,
}

impl Units {
    fn default_volume() -> String {
        "L".into()
    }

    fn default_weight() -> String {
        "g".into()
    }
}

impl Default for Units {
    fn default() -> Self {
        Self {
            volume: Self::default_volume(),
            weight: Self::default_weight(),
        }
    }
}

/// Environment overrides for display settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    volume_unit: Option<String>,
    weight_unit: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            volume_unit: env::var("SPANPACK_VOLUME_UNIT").ok(),
            weight_unit: env::var("SPANPACK_WEIGHT_UNIT").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(volume_unit: &str, weight_unit: &str) -> Self {
        Self {
            volume_unit: Some(volume_unit.to_owned()),
            weight_unit: Some(weight_unit.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from defaults, user/global config, workspace
    /// config, and env overrides.
    pub fn load() -> Result<Self> {
        let env = EnvOverrides::from_env();
        let global = global_config_path();
        let workspace = workspace_config_path()?;
        let config = Self::load_with_layers(global, workspace, env)?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    fn load_with_layers(
        global: Option<PathBuf>,
        workspace: Option<PathBuf>,
        env_overrides: EnvOverrides,
    ) -> Result<Self> {
        let mut layers: Vec<Config> = Vec::new();

        layers.push(Self::from_str(&DEFAULT_CONFIG)?);

        if let Some(global_path) = global.filter(|path| path.exists()) {
            layers.push(Self::from_file(&global_path)?);
        }

        if let Some(workspace_path) = workspace.filter(|path| path.exists()) {
            layers.push(Self::from_file(&workspace_path)?);
        }

        let merged = layers.into_iter().reduce(Config::merge).unwrap_or_default();
        Ok(apply_env_overrides(merged, env_overrides))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            defaults: merge_defaults(self.defaults, other.defaults),
            units: merge_units(self.units, other.units),
        }
    }
}

fn merge_defaults(base: Defaults, overlay: Defaults) -> Defaults {
    Defaults {
        precision: if overlay.precision != Defaults::default_precision() {
            overlay.precision
        } else {
            base.precision
        },
        confirm_destructive: if overlay.confirm_destructive
            != Defaults::default_confirm_destructive()
        {
            overlay.confirm_destructive
        } else {
            base.confirm_destructive
        },
    }
}

fn merge_units(base: Units, overlay: Units) -> Units {
    Units {
        volume: if overlay.volume != Units::default_volume() {
            overlay.volume
        } else {
            base.volume
        },
        weight: if overlay.weight != Units::default_weight() {
            overlay.weight
        } else {
            base.weight
        },
    }
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("spanpack/config.toml"))
}

fn workspace_config_path() -> Result<Option<PathBuf>> {
    let cwd = env::current_dir()?;
    Ok(Some(cwd.join(DEFAULT_WORKSPACE_CONFIG_PATH)))
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Config {
    if let Some(volume_unit) = env.volume_unit {
        config.units.volume = volume_unit;
    }
    if let Some(weight_unit) = env.weight_unit {
        config.units.weight = weight_unit;
    }
    config
}
