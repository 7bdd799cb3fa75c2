//! Stationary and mobile fuel combustion (Scope 1)
//!
//! Fuels with known physical properties use the carbon-content method:
//! mass × carbon fraction × oxidation × 44/12. Other fuels fall back to the
//! supplied emission factor.

use std::sync::Arc;

use serde_json::{Map, Value};

use super::base::{self, KG_PER_TONNE};
use super::Calculator;
use crate::domain::entities::{CalculationResult, EmissionFactor, NormalizedInput, RawInput};
use crate::domain::services::units::UnitConverterRegistry;
use crate::domain::value_objects::{ActivityType, Metadata};
use crate::error::{CalcResult, ValidationError};

/// Molecular mass ratio CO2 / C
const CO2_PER_CARBON: f64 = 44.0 / 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelProperties {
    /// kg/m³
    pub density: f64,
    /// MJ/kg
    pub net_calorific_value: f64,
    /// kg C per kg fuel
    pub carbon_content: f64,
    pub oxidation_factor: f64,
    pub is_biogenic: bool,
}

impl FuelProperties {
    const fn fossil(density: f64, ncv: f64, carbon: f64, oxidation: f64) -> Self {
        Self {
            density,
            net_calorific_value: ncv,
            carbon_content: carbon,
            oxidation_factor: oxidation,
            is_biogenic: false,
        }
    }

    /// Reference properties for fuels that have them
    pub fn builtin(activity_type: ActivityType) -> Option<Self> {
        match activity_type {
            ActivityType::NaturalGas => Some(Self::fossil(0.717, 50.0, 0.561, 0.995)),
            ActivityType::Diesel => Some(Self::fossil(832.0, 43.0, 0.870, 0.99)),
            ActivityType::Gasoline => Some(Self::fossil(742.0, 44.3, 0.855, 0.99)),
            ActivityType::Lpg => Some(Self::fossil(520.0, 47.3, 0.826, 0.995)),
            ActivityType::Coal => Some(Self::fossil(1400.0, 25.0, 0.746, 0.98)),
            ActivityType::Biomass => Some(Self {
                is_biogenic: true,
                ..Self::fossil(600.0, 15.0, 0.451, 0.99)
            }),
            _ => None,
        }
    }

    /// Parse caller-supplied `customProperties`.
    ///
    /// `density`, `netCalorificValue` and `carbonContent` are required and
    /// must be positive; `oxidationFactor` defaults to 1.0 and `isBiogenic`
    /// to false.
    pub fn from_custom(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        let required = |key: &str| -> Result<f64, ValidationError> {
            match map.get(key).and_then(Value::as_f64) {
                Some(n) if n.is_finite() && n > 0.0 => Ok(n),
                _ => Err(ValidationError::metadata(
                    format!("customProperties.{}", key),
                    "must be a positive number",
                )),
            }
        };

        let oxidation_factor = match map.get("oxidationFactor") {
            None | Some(Value::Null) => 1.0,
            Some(value) => match value.as_f64() {
                Some(n) if n > 0.0 && n <= 1.0 => n,
                _ => {
                    return Err(ValidationError::metadata(
                        "customProperties.oxidationFactor",
                        "must be in (0, 1]",
                    ))
                }
            },
        };

        Ok(Self {
            density: required("density")?,
            net_calorific_value: required("netCalorificValue")?,
            carbon_content: required("carbonContent")?,
            oxidation_factor,
            is_biogenic: map
                .get("isBiogenic")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        })
    }

    /// Fuel mass in kg for an amount in one of the canonical fuel units
    fn mass_kg(&self, amount: f64, unit: &str) -> Option<f64> {
        match unit {
            "L" => Some(amount * self.density / 1000.0),
            "m3" => Some(amount * self.density),
            "kg" => Some(amount),
            _ => None,
        }
    }
}

const ACTIVITY_TYPES: &[ActivityType] = &ActivityType::COMBUSTION_FUELS;

pub struct FuelCombustionCalculator {
    units: Arc<UnitConverterRegistry>,
}

impl FuelCombustionCalculator {
    pub fn new(units: Arc<UnitConverterRegistry>) -> Self {
        Self { units }
    }

    fn properties_for(
        activity_type: ActivityType,
        metadata: &Metadata,
    ) -> Result<Option<FuelProperties>, ValidationError> {
        match metadata.get("customProperties") {
            None | Some(Value::Null) => Ok(FuelProperties::builtin(activity_type)),
            Some(Value::Object(map)) => FuelProperties::from_custom(map).map(Some),
            Some(_) => Err(ValidationError::metadata(
                "customProperties",
                "must be an object",
            )),
        }
    }
}

impl Calculator for FuelCombustionCalculator {
    fn name(&self) -> &'static str {
        "fuel_combustion"
    }

    fn supported_activity_types(&self) -> &'static [ActivityType] {
        ACTIVITY_TYPES
    }

    fn normalized_unit(&self, activity_type: ActivityType) -> &'static str {
        match activity_type {
            ActivityType::NaturalGas => "m3",
            ActivityType::Coal | ActivityType::Biomass => "kg",
            _ => "L",
        }
    }

    fn method_name(&self) -> &'static str {
        "Fuel Combustion"
    }

    fn validate(&self, raw: &RawInput) -> Result<NormalizedInput, ValidationError> {
        let unit = self.normalized_unit(raw.activity_type());
        let input = base::normalize(&self.units, ACTIVITY_TYPES, unit, raw)?;

        let metadata = raw.metadata();
        metadata.positive_number("density")?;
        metadata.positive_number("netCalorificValue")?;

        if Self::properties_for(raw.activity_type(), metadata)?.is_none() {
            tracing::warn!(
                activity_type = %raw.activity_type(),
                "no fuel properties available, using the emission factor directly"
            );
        }
        Ok(input)
    }

    fn calculate(
        &self,
        input: &NormalizedInput,
        factor: &EmissionFactor,
    ) -> CalcResult<CalculationResult> {
        base::ensure_factor_matches(input, factor)?;

        let props = Self::properties_for(input.activity_type(), input.metadata())?;
        let Some((props, fuel_mass_kg)) = props.and_then(|p| {
            p.mass_kg(input.normalized_amount(), input.normalized_unit())
                .map(|mass| (p, mass))
        }) else {
            return base::calculate_direct(input, factor, self.method_name());
        };

        let carbon_kg = fuel_mass_kg * props.carbon_content * props.oxidation_factor;
        let co2_tonnes = carbon_kg * CO2_PER_CARBON / KG_PER_TONNE;
        let energy_content_mj = fuel_mass_kg * props.net_calorific_value;

        let mut breakdown = base::apply_factor(input, factor, factor.factor_value);
        breakdown.emission_factor_unit = factor.factor_unit.clone();
        breakdown.gwp = 1.0;
        breakdown.co2_amount = co2_tonnes;
        breakdown.co2e_amount = if props.is_biogenic { 0.0 } else { co2_tonnes };
        breakdown.ch4_amount = None;
        breakdown.n2o_amount = None;
        breakdown.methodology =
            "Fuel properties-based calculation using carbon content method".to_string();

        let mut assumptions = breakdown
            .assumptions
            .with("fuelMassKg", fuel_mass_kg)
            .with("densityKgPerM3", props.density)
            .with("netCalorificValueMjPerKg", props.net_calorific_value)
            .with("carbonContent", props.carbon_content)
            .with("oxidationFactor", props.oxidation_factor)
            .with("carbonEmittedKg", carbon_kg)
            .with("energyContentMj", energy_content_mj)
            .with("isBiogenic", props.is_biogenic);
        if props.is_biogenic {
            assumptions = assumptions.with(
                "biomassNote",
                "Biogenic CO2 emissions are considered carbon neutral",
            );
        }
        breakdown.assumptions = assumptions;

        Ok(base::finish(breakdown, self.method_name(), input, factor))
    }
}
