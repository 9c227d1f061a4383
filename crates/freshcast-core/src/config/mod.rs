//! Configuration management

use crate::error::{FreshCastError, Result};
use crate::forecast::{RecipeTable, ServiceLevel};
use crate::MAX_HORIZON_DAYS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Language assistant service
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Forecasting and production planning
    #[serde(default)]
    pub forecast: ForecastConfig,

    /// Kilograms of each material per 100 units, per product
    #[serde(default)]
    pub recipes: RecipeTable,
}

/// Chat service configuration for the language assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Base URL of an OpenAI-compatible service
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// API key. Without one the assistant is unavailable.
    #[serde(default = "default_api_key", skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            model: default_model(),
            api_key: default_api_key(),
            timeout_secs: default_timeout(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_url() -> String {
    std::env::var("FRESHCAST_LLM_URL").unwrap_or_else(|_| "https://api.openai.com".to_string())
}

fn default_model() -> String {
    std::env::var("FRESHCAST_LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string())
}

fn default_api_key() -> Option<String> {
    std::env::var("FRESHCAST_LLM_API_KEY")
        .or_else(|_| std::env::var("OPENAI_API_KEY"))
        .ok()
        .filter(|key| !key.trim().is_empty())
}

fn default_timeout() -> u64 {
    30
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    500
}

/// Forecasting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Sales history CSV used to train the engine
    #[serde(default = "default_history_path")]
    pub history_path: Option<PathBuf>,

    /// Share of forecast uncertainty covered by safety stock
    #[serde(default)]
    pub service_level: ServiceLevel,

    /// Horizon for summaries and materials when none is given
    #[serde(default = "default_horizon")]
    pub default_horizon_days: u32,

    /// Width of the forecast interval in standard deviations
    #[serde(default = "default_interval_z")]
    pub interval_z: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
            service_level: ServiceLevel::default(),
            default_horizon_days: default_horizon(),
            interval_z: default_interval_z(),
        }
    }
}

fn default_history_path() -> Option<PathBuf> {
    std::env::var("FRESHCAST_HISTORY").ok().map(PathBuf::from)
}

fn default_horizon() -> u32 {
    crate::DEFAULT_HORIZON_DAYS
}

fn default_interval_z() -> f64 {
    crate::forecast::DEFAULT_INTERVAL_Z
}

impl Config {
    /// Load config from `$FRESHCAST_CONFIG` or the default path
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::resolve_path())
    }

    /// Load config from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            tracing::debug!("Loading config from {}", path.display());
            serde_yaml::from_str(&content)?
        } else {
            Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `$FRESHCAST_CONFIG` if set, otherwise the default path
    pub fn resolve_path() -> PathBuf {
        std::env::var("FRESHCAST_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    fn validate(&self) -> Result<()> {
        let horizon = self.forecast.default_horizon_days;
        if horizon == 0 || horizon > MAX_HORIZON_DAYS {
            return Err(FreshCastError::Config(format!(
                "default_horizon_days must be between 1 and {}, got {}",
                MAX_HORIZON_DAYS, horizon
            )));
        }
        if self.forecast.interval_z.is_nan() || self.forecast.interval_z < 0.0 {
            return Err(FreshCastError::Config(format!(
                "interval_z must be non-negative, got {}",
                self.forecast.interval_z
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.yml")).unwrap();
        assert_eq!(config.forecast.default_horizon_days, 7);
        assert_eq!(config.forecast.service_level.value(), 0.95);
        assert_eq!(config.recipes, RecipeTable::bakery());
    }

    #[test]
    fn test_partial_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(
            &path,
            "forecast:\n  service_level: 0.8\nrecipes:\n  Donut:\n    sugar: 9.0\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.forecast.service_level.value(), 0.8);
        assert_eq!(config.forecast.default_horizon_days, 7);
        assert_eq!(config.recipes.recipe(Product::Donut).unwrap()["sugar"], 9.0);
        assert!(config.recipes.recipe(Product::Croissant).is_none());
    }

    #[test]
    fn test_invalid_service_level() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "forecast:\n  service_level: 1.5\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_invalid_horizon() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "forecast:\n  default_horizon_days: 0\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(FreshCastError::Config(_))
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yml");
        let mut config = Config::default();
        config.forecast.default_horizon_days = 14;
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.forecast.default_horizon_days, 14);
        assert_eq!(reloaded.recipes, config.recipes);
    }
}
