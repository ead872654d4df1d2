//! Configuration loading and management for the Assembly Cost Engine.
//!
//! This module loads the session rates and the estimate defaults from YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use assembly_cost_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Holiday region: {}", config.defaults().region);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub(crate) use types::check_hour;
pub use types::{EstimateDefaults, FlatRate, InputLimits, RateConfig, RoleRates};
