//! Configuration module for ghgcalc
//!
//! Configuration hierarchy:
//! 1. Environment variables (GHGCALC_*)
//! 2. Explicit config file, else the file named by `GHGCALC_CONFIG`
//! 3. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use types::{EngineConfig, RegistryConfig, TravelConfig};
