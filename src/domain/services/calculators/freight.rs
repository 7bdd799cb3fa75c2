//! Freight transport (Scope 3)

use std::sync::Arc;

use serde_json::{json, Value};

use super::base;
use super::Calculator;
use crate::domain::entities::{
    CalculationBreakdown, CalculationResult, EmissionFactor, NormalizedInput, RawInput,
};
use crate::domain::services::units::{UnitConverterRegistry, UnitFamily};
use crate::domain::value_objects::{ActivityType, DataQuality, Metadata};
use crate::error::{CalcResult, ValidationError};

const ACTIVITY_TYPES: &[ActivityType] = &[
    ActivityType::RoadFreight,
    ActivityType::RailFreight,
    ActivityType::SeaFreight,
    ActivityType::AirFreight,
    ActivityType::PipelineTransport,
    ActivityType::CourierDelivery,
    ActivityType::LastMileDelivery,
];

/// Air-freight volumetric conversion, kg per m³
pub const DEFAULT_VOLUMETRIC_FACTOR: f64 = 250.0;

const EMPTY_RETURN_MULTIPLIER: f64 = 1.5;

/// Chargeable weight in kg for a shipment of `volume_m3`
pub fn volumetric_weight(volume_m3: f64, factor: f64) -> f64 {
    volume_m3 * factor
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Road,
    Rail,
    Sea,
    Air,
    Pipeline,
}

impl TransportMode {
    pub fn for_activity(activity_type: ActivityType) -> Self {
        match activity_type {
            ActivityType::RailFreight => TransportMode::Rail,
            ActivityType::SeaFreight => TransportMode::Sea,
            ActivityType::AirFreight => TransportMode::Air,
            ActivityType::PipelineTransport => TransportMode::Pipeline,
            _ => TransportMode::Road,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Road => "road_freight",
            TransportMode::Rail => "rail_freight",
            TransportMode::Sea => "sea_freight",
            TransportMode::Air => "air_freight",
            TransportMode::Pipeline => "pipeline",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            TransportMode::Road => "Road freight",
            TransportMode::Rail => "Rail freight",
            TransportMode::Sea => "Sea freight",
            TransportMode::Air => "Air freight",
            TransportMode::Pipeline => "Pipeline transport",
        }
    }

    /// Load-factor multipliers this mode supports
    pub fn load_factors(&self) -> &'static [(&'static str, f64)] {
        match self {
            TransportMode::Road => &[("full_load", 1.0), ("average_load", 1.5), ("half_load", 2.0)],
            TransportMode::Rail => &[("full_load", 1.0), ("average_load", 1.2)],
            TransportMode::Sea => &[("full_load", 1.0), ("average_load", 1.1)],
            TransportMode::Air => &[("full_load", 1.0), ("average_load", 1.3)],
            TransportMode::Pipeline => &[("full_load", 1.0)],
        }
    }

    pub fn load_multiplier(&self, load_factor: &str) -> Option<f64> {
        self.load_factors()
            .iter()
            .find(|(name, _)| *name == load_factor)
            .map(|(_, multiplier)| *multiplier)
    }

    /// `average_load` where the mode has one, otherwise `full_load`
    pub fn default_load_factor(&self) -> &'static str {
        if self.load_multiplier("average_load").is_some() {
            "average_load"
        } else {
            "full_load"
        }
    }

    fn has_empty_returns(&self) -> bool {
        matches!(self, TransportMode::Road | TransportMode::Rail)
    }
}

/// Road vehicle multiplier; unknown vehicles count as medium trucks
fn vehicle_multiplier(vehicle_type: &str) -> f64 {
    match vehicle_type {
        "light_truck" => 0.8,
        "medium_truck" => 1.0,
        "heavy_truck" => 1.2,
        "articulated_truck" => 1.4,
        "van" => 0.6,
        _ => 1.0,
    }
}

/// One leg of a multimodal shipment
#[derive(Debug, Clone, PartialEq)]
pub struct FreightSegment {
    pub activity_type: ActivityType,
    pub distance_km: f64,
    pub cargo_weight_kg: f64,
    pub metadata: Metadata,
}

impl FreightSegment {
    pub fn new(activity_type: ActivityType, distance_km: f64, cargo_weight_kg: f64) -> Self {
        Self {
            activity_type,
            distance_km,
            cargo_weight_kg,
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn tonne_km(&self) -> f64 {
        self.cargo_weight_kg / 1000.0 * self.distance_km
    }
}

pub struct FreightCalculator {
    units: Arc<UnitConverterRegistry>,
}

impl FreightCalculator {
    pub fn new(units: Arc<UnitConverterRegistry>) -> Self {
        Self { units }
    }

    fn load_factor(
        mode: TransportMode,
        metadata: &Metadata,
    ) -> Result<(&str, f64), ValidationError> {
        let requested = metadata.text("loadFactor")?;
        let name = requested.unwrap_or_else(|| mode.default_load_factor());
        let multiplier = mode.load_multiplier(name).ok_or_else(|| {
            ValidationError::metadata(
                "loadFactor",
                format!("transport mode {} does not support '{}'", mode.as_str(), name),
            )
        })?;
        Ok((name, multiplier))
    }

    /// Calculate every segment with its own factor and sum the results.
    ///
    /// `resolve` supplies the factor for a segment's activity type. Any
    /// segment failure fails the whole shipment.
    pub fn calculate_multimodal<F>(
        &self,
        segments: &[FreightSegment],
        mut resolve: F,
    ) -> CalcResult<CalculationResult>
    where
        F: FnMut(ActivityType) -> CalcResult<EmissionFactor>,
    {
        if segments.is_empty() {
            return Err(ValidationError::metadata("segments", "at least one segment is required").into());
        }

        let mut total = 0.0;
        let mut details: Vec<Value> = Vec::with_capacity(segments.len());
        for segment in segments {
            let metadata = segment
                .metadata
                .clone()
                .with("cargoWeight", segment.cargo_weight_kg)
                .with("distance", segment.distance_km);
            let raw = RawInput::new(segment.activity_type, segment.tonne_km(), "tonne-km")
                .with_metadata(metadata);

            let input = self.validate(&raw)?;
            let factor = resolve(segment.activity_type)?;
            let result = self.calculate(&input, &factor)?;

            total += result.t_co2e;
            details.push(json!({
                "segment": segment.activity_type.as_str(),
                "emissions": result.t_co2e,
                "factorId": factor.id,
                "details": result.breakdown,
            }));
        }

        let breakdown = CalculationBreakdown {
            original_amount: segments.iter().map(|s| s.cargo_weight_kg).sum(),
            original_unit: "kg".to_string(),
            normalized_amount: segments.iter().map(FreightSegment::tonne_km).sum(),
            normalized_unit: "tonne-km".to_string(),
            emission_factor: 0.0,
            emission_factor_unit: "mixed".to_string(),
            gwp: 1.0,
            co2_amount: total,
            co2e_amount: total,
            ch4_amount: None,
            n2o_amount: None,
            methodology: "Multimodal freight transport calculation".to_string(),
            assumptions: Metadata::new()
                .with("segments", Value::Array(details))
                .with("totalSegments", segments.len()),
        };

        Ok(CalculationResult {
            t_co2e: total,
            breakdown: Some(breakdown),
            method: format!("Multimodal {}", self.method_name()),
            data_quality: DataQuality::Calculated,
            uncertainty: None,
        })
    }
}

impl Calculator for FreightCalculator {
    fn name(&self) -> &'static str {
        "freight"
    }

    fn supported_activity_types(&self) -> &'static [ActivityType] {
        ACTIVITY_TYPES
    }

    fn normalized_unit(&self, _activity_type: ActivityType) -> &'static str {
        "tonne-km"
    }

    fn method_name(&self) -> &'static str {
        "Freight Transport"
    }

    fn validate(&self, raw: &RawInput) -> Result<NormalizedInput, ValidationError> {
        let metadata = raw.metadata();
        metadata.positive_number("cargoWeight")?;
        let distance = metadata.positive_number("distance")?;

        let mode = TransportMode::for_activity(raw.activity_type());
        let (load_factor, _) = Self::load_factor(mode, metadata)?;

        // Cargo mass plus a distance becomes tonne-km
        let rewritten;
        let raw = match distance {
            Some(distance) if self.units.family_of(raw.unit()) == Some(UnitFamily::Mass) => {
                let tonnes = self.units.convert(raw.amount(), raw.unit(), "t")?;
                rewritten = raw.rewritten(tonnes * distance, "tonne-km");
                &rewritten
            }
            _ => raw,
        };

        let unit = self.normalized_unit(raw.activity_type());
        let input = base::normalize(&self.units, ACTIVITY_TYPES, unit, raw)?;
        Ok(input
            .tagged("loadFactor", load_factor)
            .tagged("transportMode", mode.as_str()))
    }

    fn calculate(
        &self,
        input: &NormalizedInput,
        factor: &EmissionFactor,
    ) -> CalcResult<CalculationResult> {
        base::ensure_factor_matches(input, factor)?;

        let metadata = input.metadata();
        let mode = TransportMode::for_activity(input.activity_type());
        let (load_factor, load_multiplier) = Self::load_factor(mode, metadata)?;
        let vehicle_type = metadata.str("vehicleType");
        let vehicle = match (mode, vehicle_type) {
            (TransportMode::Road, Some(v)) => vehicle_multiplier(v),
            _ => 1.0,
        };
        let empty_return = mode.has_empty_returns() && metadata.flag("includeEmptyReturn");

        let mut adjusted = factor.factor_value * load_multiplier * vehicle;
        if empty_return {
            adjusted *= EMPTY_RETURN_MULTIPLIER;
        }

        let mut breakdown = base::apply_factor(input, factor, adjusted);
        breakdown.methodology = format!(
            "{} emissions with load and vehicle adjustments",
            mode.description()
        );
        breakdown.assumptions = breakdown
            .assumptions
            .with("transportMode", mode.as_str())
            .with("loadFactor", load_factor)
            .with("loadMultiplier", load_multiplier)
            .with("vehicleType", vehicle_type.unwrap_or("default"))
            .with("vehicleMultiplier", vehicle)
            .with("originalEmissionFactor", factor.factor_value)
            .with("adjustedEmissionFactor", adjusted)
            .with(
                "emptyReturnNote",
                if empty_return {
                    "Includes 50% adjustment for empty return journey"
                } else {
                    "Direct journey only"
                },
            );

        Ok(base::finish(breakdown, self.method_name(), input, factor))
    }
}
