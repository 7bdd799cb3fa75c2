//! Behaviour shared by every calculator

use crate::domain::entities::{
    CalculationBreakdown, CalculationResult, EmissionFactor, NormalizedInput, RawInput,
};
use crate::domain::policies::determine_data_quality;
use crate::domain::services::units::UnitConverterRegistry;
use crate::domain::value_objects::{ActivityType, DataQuality};
use crate::error::{CalcError, CalcResult, ValidationError};

pub const KG_PER_TONNE: f64 = 1000.0;

/// Common validation: claimed type, finite non-negative amount, convertible
/// unit and a well-formed declared data quality.
pub(super) fn normalize(
    units: &UnitConverterRegistry,
    supported: &[ActivityType],
    canonical_unit: &str,
    raw: &RawInput,
) -> Result<NormalizedInput, ValidationError> {
    if !supported.contains(&raw.activity_type()) {
        return Err(ValidationError::UnsupportedActivityType {
            activity_type: raw.activity_type().to_string(),
        });
    }

    let amount = raw.amount();
    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::InvalidAmount { amount });
    }

    if let Some(declared) = raw.metadata().text("dataQuality")? {
        declared
            .parse::<DataQuality>()
            .map_err(|reason| ValidationError::metadata("dataQuality", reason))?;
    }

    let normalized = units.convert(amount, raw.unit(), canonical_unit)?;
    Ok(NormalizedInput::new(raw, normalized, canonical_unit))
}

pub(super) fn ensure_factor_matches(
    input: &NormalizedInput,
    factor: &EmissionFactor,
) -> CalcResult<()> {
    if factor.activity_type != input.activity_type() {
        return Err(CalcError::FactorMismatch {
            factor_id: factor.id.clone(),
            factor_activity_type: factor.activity_type,
            input_activity_type: input.activity_type(),
        });
    }
    Ok(())
}

/// Breakdown for `normalized_amount × factor_value` with GWP applied.
///
/// For single-gas CH4 or N2O factors the gas mass is reported separately.
pub(super) fn apply_factor(
    input: &NormalizedInput,
    factor: &EmissionFactor,
    factor_value: f64,
) -> CalculationBreakdown {
    let gas_tonnes = input.normalized_amount() * factor_value / KG_PER_TONNE;

    let mut breakdown = CalculationBreakdown::for_input(input, factor);
    breakdown.emission_factor = factor_value;
    breakdown.co2_amount = gas_tonnes;
    breakdown.co2e_amount = gas_tonnes * factor.gwp;
    if factor.is_gas("CH4") {
        breakdown.ch4_amount = Some(gas_tonnes);
    } else if factor.is_gas("N2O") {
        breakdown.n2o_amount = Some(gas_tonnes);
    }
    breakdown
}

/// Wrap a finished breakdown into a result; tCO2e is the breakdown's CO2e
pub(super) fn finish(
    breakdown: CalculationBreakdown,
    method: &str,
    input: &NormalizedInput,
    factor: &EmissionFactor,
) -> CalculationResult {
    CalculationResult {
        t_co2e: breakdown.co2e_amount,
        breakdown: Some(breakdown),
        method: method.to_string(),
        data_quality: determine_data_quality(input.metadata(), factor),
        uncertainty: input.metadata().f64("uncertainty"),
    }
}

/// The shared direct-multiplication algorithm
pub(super) fn calculate_direct(
    input: &NormalizedInput,
    factor: &EmissionFactor,
    method: &str,
) -> CalcResult<CalculationResult> {
    ensure_factor_matches(input, factor)?;
    let breakdown = apply_factor(input, factor, factor.factor_value);
    Ok(finish(breakdown, method, input, factor))
}
