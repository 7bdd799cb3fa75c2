//! Business travel and employee commuting (Scope 3)

use std::sync::Arc;

use super::base;
use super::Calculator;
use crate::domain::entities::{CalculationResult, EmissionFactor, NormalizedInput, RawInput};
use crate::domain::services::units::UnitConverterRegistry;
use crate::domain::value_objects::{ActivityType, Metadata};
use crate::error::{CalcResult, ValidationError};

const ACTIVITY_TYPES: &[ActivityType] = &[
    ActivityType::EmployeeCommuting,
    ActivityType::BusinessTravel,
    ActivityType::ConferenceAttendance,
    ActivityType::ClientVisits,
    ActivityType::TrainingSessions,
];

pub const DEFAULT_WORKDAYS_PER_MONTH: f64 = 22.0;

const DEFAULT_MODE: &str = "public_transport";

const COMMUTE_MODES: &[(&str, f64)] = &[
    ("walking", 0.0),
    ("cycling", 0.0),
    ("public_transport", 1.0),
    ("carpooling", 0.5),
    ("electric_vehicle", 0.2),
    ("hybrid_vehicle", 0.7),
    ("gasoline_vehicle", 1.0),
    ("diesel_vehicle", 1.1),
    ("motorcycle", 0.8),
    ("taxi", 1.2),
];

const TRAVEL_MODES: &[(&str, f64)] = &[
    ("walking", 0.0),
    ("cycling", 0.0),
    ("public_transport", 1.0),
    ("car_rental", 1.0),
    ("company_vehicle", 1.0),
    ("taxi", 1.2),
    ("ride_sharing", 0.8),
];

fn mode_multiplier(activity_type: ActivityType, mode: &str) -> Result<f64, ValidationError> {
    let table = if activity_type == ActivityType::EmployeeCommuting {
        COMMUTE_MODES
    } else {
        TRAVEL_MODES
    };
    table
        .iter()
        .find(|(name, _)| *name == mode)
        .map(|(_, multiplier)| *multiplier)
        .ok_or_else(|| {
            ValidationError::metadata(
                "transportMode",
                format!("unsupported transport mode '{}' for {}", mode, activity_type),
            )
        })
}

pub struct BusinessTravelCalculator {
    units: Arc<UnitConverterRegistry>,
    workdays_per_month: f64,
}

impl BusinessTravelCalculator {
    pub fn new(units: Arc<UnitConverterRegistry>) -> Self {
        Self {
            units,
            workdays_per_month: DEFAULT_WORKDAYS_PER_MONTH,
        }
    }

    pub fn with_workdays_per_month(mut self, workdays: f64) -> Self {
        self.workdays_per_month = workdays;
        self
    }

    pub fn workdays_per_month(&self) -> f64 {
        self.workdays_per_month
    }

    /// Twelve months of a monthly commuting input
    pub fn calculate_annual_commute(
        &self,
        monthly: &NormalizedInput,
        factor: &EmissionFactor,
    ) -> CalcResult<CalculationResult> {
        let annual = monthly
            .with_normalized_amount(monthly.normalized_amount() * 12.0)
            .tagged("period", "annual");
        self.calculate(&annual, factor)
    }

    fn transport_mode(metadata: &Metadata) -> Result<&str, ValidationError> {
        Ok(metadata.text("transportMode")?.unwrap_or(DEFAULT_MODE))
    }
}

impl Calculator for BusinessTravelCalculator {
    fn name(&self) -> &'static str {
        "business_travel"
    }

    fn supported_activity_types(&self) -> &'static [ActivityType] {
        ACTIVITY_TYPES
    }

    fn normalized_unit(&self, activity_type: ActivityType) -> &'static str {
        if activity_type == ActivityType::EmployeeCommuting {
            "km"
        } else {
            "passenger-km"
        }
    }

    fn method_name(&self) -> &'static str {
        "Business Travel"
    }

    fn validate(&self, raw: &RawInput) -> Result<NormalizedInput, ValidationError> {
        let unit = self.normalized_unit(raw.activity_type());
        let input = base::normalize(&self.units, ACTIVITY_TYPES, unit, raw)?;

        let metadata = raw.metadata();
        let distance = metadata.positive_number("distance")?;
        let frequency = metadata.positive_number("frequency")?.unwrap_or(1.0);
        let workdays = metadata
            .positive_number("workdays")?
            .unwrap_or(self.workdays_per_month);
        metadata.positive_number("occupancy")?;
        mode_multiplier(raw.activity_type(), Self::transport_mode(metadata)?)?;

        match distance {
            Some(distance) if raw.activity_type() == ActivityType::EmployeeCommuting => {
                let round_trip = distance * 2.0;
                let monthly = round_trip * frequency * workdays;
                Ok(input
                    .with_normalized_amount(monthly)
                    .tagged("roundTripDistance", round_trip)
                    .tagged("monthlyDistance", monthly))
            }
            _ => Ok(input),
        }
    }

    fn calculate(
        &self,
        input: &NormalizedInput,
        factor: &EmissionFactor,
    ) -> CalcResult<CalculationResult> {
        base::ensure_factor_matches(input, factor)?;

        let is_commute = input.activity_type() == ActivityType::EmployeeCommuting;
        let mode = Self::transport_mode(input.metadata())?;
        let multiplier = mode_multiplier(input.activity_type(), mode)?;
        let occupancy = input.metadata().f64("occupancy").unwrap_or(1.0);

        let mut adjusted = factor.factor_value * multiplier;
        if occupancy > 1.0 {
            adjusted /= occupancy;
        }

        let mut breakdown = base::apply_factor(input, factor, adjusted);
        breakdown.methodology = if is_commute {
            "Employee commuting emissions with transport mode adjustment"
        } else {
            "Business travel emissions with occupancy adjustment"
        }
        .to_string();
        breakdown.assumptions = breakdown
            .assumptions
            .with("transportMode", mode)
            .with("modeMultiplier", multiplier)
            .with("occupancy", occupancy)
            .with("originalEmissionFactor", factor.factor_value)
            .with("adjustedEmissionFactor", adjusted);

        Ok(base::finish(breakdown, self.method_name(), input, factor))
    }
}
