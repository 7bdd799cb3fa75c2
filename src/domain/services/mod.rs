//! Domain Services
//!
//! Unit conversion, the activity calculators, the calculator registry and
//! emission factor selection. Nothing here performs I/O.

mod calculator_registry;
pub mod calculators;
mod factor_resolver;
pub mod units;

pub use calculator_registry::{
    CalculatorRegistry, ConfigurationReport, RegistryError, RegistryStatistics,
    DEFAULT_REQUIRED_ACTIVITY_TYPES,
};
pub use calculators::Calculator;
pub use factor_resolver::{EmissionFactorResolver, FactorNotFound};
pub use units::{TableConverter, UnitConverter, UnitConverterRegistry, UnitError, UnitFamily};
