//! Air travel (Scope 3)

use std::sync::Arc;

use super::base;
use super::Calculator;
use crate::domain::entities::{CalculationResult, EmissionFactor, NormalizedInput, RawInput};
use crate::domain::services::units::UnitConverterRegistry;
use crate::domain::value_objects::ActivityType;
use crate::error::{CalcResult, ValidationError};

const ACTIVITY_TYPES: &[ActivityType] = &[
    ActivityType::FlightDomesticShort,
    ActivityType::FlightDomesticMedium,
    ActivityType::FlightDomesticLong,
    ActivityType::FlightInternationalShort,
    ActivityType::FlightInternationalMedium,
    ActivityType::FlightInternationalLong,
    ActivityType::FlightGeneral,
];

/// Radiative forcing index applied when `includeRFI` is set
pub const RFI_MULTIPLIER: f64 = 2.7;

/// Distance classes in lookup order: `(name, upper bound km, multiplier)`.
///
/// `domestic_long` claims everything up to 3000 km first, so distance
/// classification never yields `international_short`.
const DISTANCE_CLASSES: &[(&str, f64, f64)] = &[
    ("domestic_short", 500.0, 1.0),
    ("domestic_medium", 1500.0, 0.95),
    ("domestic_long", 3000.0, 0.90),
    ("international_short", 3000.0, 0.95),
    ("international_medium", 6000.0, 0.85),
    ("international_long", f64::INFINITY, 0.80),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "economy" => Some(CabinClass::Economy),
            "premium_economy" => Some(CabinClass::PremiumEconomy),
            "business" => Some(CabinClass::Business),
            "first" => Some(CabinClass::First),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::PremiumEconomy => "premium_economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }

    /// Seat-area multiplier relative to economy
    pub fn multiplier(&self) -> f64 {
        match self {
            CabinClass::Economy => 1.0,
            CabinClass::PremiumEconomy => 1.6,
            CabinClass::Business => 2.8,
            CabinClass::First => 4.0,
        }
    }

    fn from_metadata(value: Option<&str>) -> Result<Self, ValidationError> {
        match value {
            None => Ok(CabinClass::Economy),
            Some(v) => Self::parse(v).ok_or_else(|| {
                ValidationError::metadata("cabinClass", format!("unsupported cabin class '{}'", v))
            }),
        }
    }
}

/// Distance class for a flight of `distance_km`
fn classify_distance(distance_km: f64) -> &'static str {
    DISTANCE_CLASSES
        .iter()
        .find(|(_, bound, _)| distance_km <= *bound)
        .map(|(name, _, _)| *name)
        .unwrap_or("international_long")
}

fn distance_multiplier(flight_type: &str) -> f64 {
    DISTANCE_CLASSES
        .iter()
        .find(|(name, _, _)| *name == flight_type)
        .map(|(_, _, multiplier)| *multiplier)
        .unwrap_or(1.0)
}

pub struct FlightCalculator {
    units: Arc<UnitConverterRegistry>,
}

impl FlightCalculator {
    pub fn new(units: Arc<UnitConverterRegistry>) -> Self {
        Self { units }
    }

    /// Explicit `flightType`, else the activity type suffix, else the
    /// distance class of `metadata.distance`, else `unknown`.
    fn flight_type(input: &NormalizedInput) -> String {
        if let Some(explicit) = input.metadata().str("flightType") {
            return explicit.to_string();
        }
        if input.activity_type() != ActivityType::FlightGeneral {
            let name = input.activity_type().as_str();
            return name.strip_prefix("flight_").unwrap_or(name).to_string();
        }
        match input.metadata().f64("distance") {
            Some(distance) if distance > 0.0 => classify_distance(distance).to_string(),
            _ => "unknown".to_string(),
        }
    }

    /// Same trip flown out and back
    pub fn calculate_round_trip(
        &self,
        input: &NormalizedInput,
        factor: &EmissionFactor,
    ) -> CalcResult<CalculationResult> {
        let round_trip = input
            .with_normalized_amount(input.normalized_amount() * 2.0)
            .tagged("tripType", "round_trip");
        self.calculate(&round_trip, factor)
    }
}

impl Calculator for FlightCalculator {
    fn name(&self) -> &'static str {
        "flight"
    }

    fn supported_activity_types(&self) -> &'static [ActivityType] {
        ACTIVITY_TYPES
    }

    fn normalized_unit(&self, _activity_type: ActivityType) -> &'static str {
        "passenger-km"
    }

    fn method_name(&self) -> &'static str {
        "Flight Emissions"
    }

    fn validate(&self, raw: &RawInput) -> Result<NormalizedInput, ValidationError> {
        let metadata = raw.metadata();
        let distance = metadata.positive_number("distance")?;
        let passengers = metadata.positive_number("passengers")?;
        let cabin = CabinClass::from_metadata(metadata.text("cabinClass")?)?;

        // A trip given in km with a passenger count becomes passenger-km
        let rewritten;
        let raw = match (distance, passengers) {
            (Some(distance), Some(passengers)) if raw.unit() == "km" => {
                rewritten = raw.rewritten(distance * passengers, "passenger-km");
                &rewritten
            }
            _ => raw,
        };

        let unit = self.normalized_unit(raw.activity_type());
        let input = base::normalize(&self.units, ACTIVITY_TYPES, unit, raw)?;
        Ok(input.tagged("cabinClass", cabin.as_str()))
    }

    fn calculate(
        &self,
        input: &NormalizedInput,
        factor: &EmissionFactor,
    ) -> CalcResult<CalculationResult> {
        base::ensure_factor_matches(input, factor)?;

        let cabin = CabinClass::from_metadata(input.metadata().str("cabinClass"))?;
        let flight_type = Self::flight_type(input);
        let distance_factor = distance_multiplier(&flight_type);
        let include_rfi = input.metadata().flag("includeRFI");
        let rfi = if include_rfi { RFI_MULTIPLIER } else { 1.0 };
        let adjusted = factor.factor_value * cabin.multiplier() * distance_factor * rfi;

        let mut breakdown = base::apply_factor(input, factor, adjusted);
        breakdown.methodology =
            "Flight emissions calculation with cabin class and distance adjustments".to_string();
        breakdown.assumptions = breakdown
            .assumptions
            .with("cabinClass", cabin.as_str())
            .with("cabinMultiplier", cabin.multiplier())
            .with("flightType", flight_type)
            .with("distanceFactor", distance_factor)
            .with("rfiMultiplier", rfi)
            .with("originalEmissionFactor", factor.factor_value)
            .with("adjustedEmissionFactor", adjusted)
            .with(
                "rfiNote",
                if include_rfi {
                    "Includes radiative forcing index (RFI) for high-altitude emissions"
                } else {
                    "Direct CO2 emissions only"
                },
            );

        Ok(base::finish(breakdown, self.method_name(), input, factor))
    }
}
