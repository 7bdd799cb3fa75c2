//! Data quality policy
//!
//! A result's data quality follows the caller's declaration when there is
//! one. Otherwise it is inferred from who published the factor:
//! organization-specific (`CUSTOM`) factors count as measured, IPCC and EPA
//! factors as calculated, and anything else as estimated.

use crate::domain::entities::EmissionFactor;
use crate::domain::value_objects::{DataQuality, Metadata};

pub fn determine_data_quality(metadata: &Metadata, factor: &EmissionFactor) -> DataQuality {
    if let Some(declared) = metadata
        .str("dataQuality")
        .and_then(|s| s.parse::<DataQuality>().ok())
    {
        return declared;
    }

    let source = factor.source.as_str();
    if source.eq_ignore_ascii_case("CUSTOM") {
        DataQuality::Measured
    } else if source.eq_ignore_ascii_case("IPCC") || source.eq_ignore_ascii_case("EPA") {
        DataQuality::Calculated
    } else {
        DataQuality::Estimated
    }
}
