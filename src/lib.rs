//! ghgcalc - greenhouse-gas emissions calculation engine
//!
//! ghgcalc turns recorded activity data (energy consumed, fuel burned,
//! distance travelled, waste processed) into tonnes of CO2-equivalent. It
//! normalizes units, selects an emission factor, applies the calculation
//! method for the activity type and returns an auditable breakdown.
//!
//! Storage stays outside the engine: activity records and emission factors
//! arrive through the ports in [`domain::ports`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    BatchCalculationResult, BatchRequest, BatchSummary, CalculationService, RecordCalculation,
};
pub use config::{ConfigWarning, EngineConfig};
pub use domain::entities::{
    ActivityRecord, CalculationBreakdown, CalculationResult, EmissionFactor, NormalizedInput,
    RawInput, SourceType,
};
pub use domain::services::calculators::FreightSegment;
pub use domain::services::{
    Calculator, CalculatorRegistry, EmissionFactorResolver, FactorNotFound, UnitConverterRegistry,
};
pub use domain::value_objects::{
    ActivityType, BatchFilters, DataQuality, DuplicatePolicy, EmissionScope, Metadata,
};
pub use error::{CalcError, CalcResult, ValidationError};
