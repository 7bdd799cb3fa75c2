//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::calculators::DEFAULT_WORKDAYS_PER_MONTH;
use crate::domain::services::DEFAULT_REQUIRED_ACTIVITY_TYPES;
use crate::domain::value_objects::{ActivityType, DuplicatePolicy};
use crate::error::CalcResult;

use super::loader;
use super::ConfigWarning;

/// Calculator registry settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Activity types `validate_configuration` insists on
    #[serde(default = "default_required_activity_types")]
    pub required_activity_types: Vec<ActivityType>,

    /// What happens when two calculators claim the same activity type
    #[serde(default)]
    pub duplicate_registration: DuplicatePolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            required_activity_types: default_required_activity_types(),
            duplicate_registration: DuplicatePolicy::default(),
        }
    }
}

fn default_required_activity_types() -> Vec<ActivityType> {
    DEFAULT_REQUIRED_ACTIVITY_TYPES.to_vec()
}

/// Business travel and commuting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelConfig {
    #[serde(default = "default_workdays_per_month")]
    pub workdays_per_month: f64,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            workdays_per_month: default_workdays_per_month(),
        }
    }
}

fn default_workdays_per_month() -> f64 {
    DEFAULT_WORKDAYS_PER_MONTH
}

/// Engine configuration, usually read from `ghgcalc.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub travel: TravelConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CalcResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit path, `GHGCALC_CONFIG`, or defaults
    pub fn load_or_default(path: Option<&Path>) -> CalcResult<Self> {
        loader::load_or_default(path)
    }

    /// Apply environment variable overrides (GHGCALC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
