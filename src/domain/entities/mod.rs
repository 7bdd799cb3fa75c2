//! Domain Entities
//!
//! - `EmissionFactor` - A catalog entry used to turn activity into emissions
//! - `ActivityRecord` - Stored activity data owned by an organization
//! - `RawInput` / `NormalizedInput` - Calculator input before and after normalization
//! - `CalculationResult` - Emissions plus an audit breakdown

mod activity_record;
mod calculation;
mod emission_factor;

pub use activity_record::ActivityRecord;
pub use calculation::{CalculationBreakdown, CalculationResult, NormalizedInput, RawInput};
pub use emission_factor::{EmissionFactor, SourceType};
