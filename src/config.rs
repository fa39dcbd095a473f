use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tortoise::Algorithm;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub detection: DetectionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Algorithm used when the command line names none; `None` picks by
    /// state-space size
    pub algorithm: Option<Algorithm>,
    /// Reads allowed before giving up with an undetermined result
    pub step_budget: Option<usize>,
    /// Largest known state space for which the visited set is preferred
    pub small_state_space: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            algorithm: None,
            step_budget: None,
            small_state_space: 1 << 16,
        }
    }
}

impl DetectionConfig {
    /// Explicit choice first, then the configured one, then the advisory
    /// default for the given state space
    pub fn algorithm_for(&self, explicit: Option<Algorithm>, state_space: Option<usize>) -> Algorithm {
        explicit
            .or(self.algorithm)
            .unwrap_or_else(|| Algorithm::recommended(state_space, self.small_state_space))
    }

    pub fn budget_for(&self, explicit: Option<usize>) -> Option<usize> {
        explicit.or(self.step_budget)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            detection: DetectionConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
