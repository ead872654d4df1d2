//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EstimateDefaults, RateConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── rates.yaml     # Hourly rates, kilometer price, flat rate, lodging, meals
/// └── estimate.yaml  # Holiday region, default shift and request limits
/// ```
///
/// # Example
///
/// ```no_run
/// use assembly_cost_engine::config::ConfigLoader;
/// use assembly_cost_engine::models::Role;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Mechanic rate: {}", loader.rates().hourly_rates.rate(Role::Mechanic));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: RateConfig,
    defaults: EstimateDefaults,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The default region or shift hours are invalid
    /// - Any rate is negative or above its limit
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let rates_path = path.join("rates.yaml");
        let defaults_path = path.join("estimate.yaml");

        let rates = Self::load_yaml::<RateConfig>(&rates_path)?;
        let defaults = Self::load_yaml::<EstimateDefaults>(&defaults_path)?;

        defaults
            .validate()
            .map_err(|e| invalid_config(&defaults_path, e))?;
        rates
            .validate(&defaults.limits)
            .map_err(|e| invalid_config(&rates_path, e))?;

        tracing::debug!(
            config_dir = %path.display(),
            region = %defaults.region,
            "Loaded engine configuration"
        );

        Ok(Self { rates, defaults })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the session rates.
    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// Returns the request defaults.
    pub fn defaults(&self) -> &EstimateDefaults {
        &self.defaults
    }
}

/// Reports a semantically invalid configuration file as a parse error.
fn invalid_config(path: &Path, error: EngineError) -> EngineError {
    EngineError::ConfigParseError {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
