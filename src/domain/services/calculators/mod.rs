//! Activity calculators
//!
//! Each calculator owns a group of activity types. `validate` turns raw
//! activity data into the canonical unit for its type; `calculate` applies an
//! emission factor to the normalized input. Calculators never touch storage.

mod base;
mod business_travel;
mod electricity;
mod flight;
mod freight;
mod fuel_combustion;
mod waste;

use crate::domain::entities::{CalculationResult, EmissionFactor, NormalizedInput, RawInput};
use crate::domain::value_objects::ActivityType;
use crate::error::{CalcResult, ValidationError};

pub use base::KG_PER_TONNE;
pub use business_travel::{BusinessTravelCalculator, DEFAULT_WORKDAYS_PER_MONTH};
pub use electricity::{
    transmission_loss_adjustment, AccountingMethod, ContractType, ElectricityCalculator,
    DEFAULT_TRANSMISSION_LOSS_RATE,
};
pub use flight::{CabinClass, FlightCalculator, RFI_MULTIPLIER};
pub use freight::{
    volumetric_weight, FreightCalculator, FreightSegment, TransportMode,
    DEFAULT_VOLUMETRIC_FACTOR,
};
pub use fuel_combustion::{FuelCombustionCalculator, FuelProperties};
pub use waste::{Treatment, WasteCalculator, WasteProperties};

/// One calculation strategy
pub trait Calculator: Send + Sync {
    /// Stable identifier used in registry statistics
    fn name(&self) -> &'static str;

    fn supported_activity_types(&self) -> &'static [ActivityType];

    /// Canonical unit inputs of `activity_type` are normalized to
    fn normalized_unit(&self, activity_type: ActivityType) -> &'static str;

    /// Method label carried by results
    fn method_name(&self) -> &'static str;

    fn validate(&self, raw: &RawInput) -> Result<NormalizedInput, ValidationError>;

    fn calculate(
        &self,
        input: &NormalizedInput,
        factor: &EmissionFactor,
    ) -> CalcResult<CalculationResult>;

    fn supports(&self, activity_type: ActivityType) -> bool {
        self.supported_activity_types().contains(&activity_type)
    }
}
