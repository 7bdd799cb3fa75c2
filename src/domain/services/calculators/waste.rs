//! Waste treatment (Scope 3)
//!
//! Each treatment route has its own model. Landfill and digestion track
//! methane, incineration nets out biogenic carbon and recovered energy, and
//! recycling yields a negative avoided-emissions credit.

use std::sync::Arc;

use serde_json::json;

use super::base::{self, KG_PER_TONNE};
use super::Calculator;
use crate::domain::entities::{CalculationResult, EmissionFactor, NormalizedInput, RawInput};
use crate::domain::services::units::UnitConverterRegistry;
use crate::domain::value_objects::{ActivityType, Metadata};
use crate::error::{CalcResult, ValidationError};

const ACTIVITY_TYPES: &[ActivityType] = &[
    ActivityType::WasteLandfill,
    ActivityType::WasteIncineration,
    ActivityType::WasteRecycling,
    ActivityType::WasteComposting,
    ActivityType::WasteAnaerobicDigestion,
    ActivityType::WasteTreatmentGeneral,
];

const GWP_CH4: f64 = 25.0;
const GWP_N2O: f64 = 298.0;
/// kg CH4 per kg organic carbon
const LANDFILL_METHANE_YIELD: f64 = 0.5;
/// kg CH4 per kg organic waste
const DIGESTION_METHANE_YIELD: f64 = 0.3;
const COMPOST_CH4_PER_KG: f64 = 0.004;
const COMPOST_N2O_PER_KG: f64 = 0.0003;
const INCINERATION_RECOVERY_CREDIT: f64 = 0.3;
const DIGESTION_RECOVERY_CREDIT: f64 = 0.5;
const DEFAULT_ENERGY_RECOVERY_RATE: f64 = 0.25;
const DEFAULT_RECYCLING_POTENTIAL: f64 = 0.8;
const DEFAULT_BIOGENIC_FRACTION: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    Landfill,
    Incineration,
    Recycling,
    Composting,
    AnaerobicDigestion,
}

impl Treatment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Treatment::Landfill => "landfill",
            Treatment::Incineration => "incineration",
            Treatment::Recycling => "recycling",
            Treatment::Composting => "composting",
            Treatment::AnaerobicDigestion => "anaerobic_digestion",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Treatment::Landfill => "Landfill",
            Treatment::Incineration => "Incineration",
            Treatment::Recycling => "Recycling",
            Treatment::Composting => "Composting",
            Treatment::AnaerobicDigestion => "Anaerobic digestion",
        }
    }

    fn default_capture_rate(&self) -> f64 {
        match self {
            Treatment::Landfill => 0.75,
            Treatment::AnaerobicDigestion => 0.95,
            _ => 0.0,
        }
    }

    /// Route for an activity; `waste_treatment_general` is treated as landfill
    pub fn for_activity(activity_type: ActivityType) -> Self {
        match activity_type {
            ActivityType::WasteIncineration => Treatment::Incineration,
            ActivityType::WasteRecycling => Treatment::Recycling,
            ActivityType::WasteComposting => Treatment::Composting,
            ActivityType::WasteAnaerobicDigestion => Treatment::AnaerobicDigestion,
            _ => Treatment::Landfill,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WasteProperties {
    pub organic_content: f64,
    pub moisture_content: f64,
    pub carbon_content: f64,
    pub recycling_potential: Option<f64>,
    pub is_biogenic: bool,
    pub is_hazardous: bool,
}

impl WasteProperties {
    const fn new(organic: f64, moisture: f64, carbon: f64) -> Self {
        Self {
            organic_content: organic,
            moisture_content: moisture,
            carbon_content: carbon,
            recycling_potential: None,
            is_biogenic: false,
            is_hazardous: false,
        }
    }

    pub fn for_waste_type(waste_type: &str) -> Option<Self> {
        let props = match waste_type {
            "mixed_municipal" => Self::new(0.3, 0.25, 0.5),
            "food_waste" => Self::new(0.9, 0.7, 0.48),
            "paper_cardboard" => Self::new(0.95, 0.1, 0.43),
            "plastic" => Self {
                recycling_potential: Some(0.8),
                ..Self::new(0.0, 0.02, 0.75)
            },
            "glass" => Self {
                recycling_potential: Some(0.9),
                ..Self::new(0.0, 0.02, 0.0)
            },
            "metal" => Self {
                recycling_potential: Some(0.95),
                ..Self::new(0.0, 0.02, 0.0)
            },
            "textile" => Self::new(0.8, 0.1, 0.5),
            "wood" => Self {
                is_biogenic: true,
                ..Self::new(0.95, 0.2, 0.5)
            },
            "electronic" => Self {
                is_hazardous: true,
                ..Self::new(0.1, 0.05, 0.2)
            },
            _ => return None,
        };
        Some(props)
    }

    fn from_metadata(metadata: &Metadata) -> Result<(&str, Self), ValidationError> {
        let waste_type = metadata.text("wasteType")?.unwrap_or("mixed_municipal");
        let props = Self::for_waste_type(waste_type).ok_or_else(|| {
            ValidationError::metadata("wasteType", format!("unsupported waste type '{}'", waste_type))
        })?;
        Ok((waste_type, props))
    }
}

/// Outcome of one treatment model, in tonnes
#[derive(Debug, Default)]
struct Emissions {
    t_co2e: f64,
    ch4: Option<f64>,
    n2o: Option<f64>,
}

pub struct WasteCalculator {
    units: Arc<UnitConverterRegistry>,
}

impl WasteCalculator {
    pub fn new(units: Arc<UnitConverterRegistry>) -> Self {
        Self { units }
    }

    fn landfill(kg: f64, props: &WasteProperties, capture: f64, factor: &EmissionFactor) -> Emissions {
        let organic_carbon = kg * props.organic_content * props.carbon_content;
        let escaped_ch4_kg = organic_carbon * LANDFILL_METHANE_YIELD * (1.0 - capture);
        let ch4_tonnes = escaped_ch4_kg / KG_PER_TONNE;
        let direct_co2 = if factor.is_gas("CO2") {
            kg * factor.factor_value / KG_PER_TONNE
        } else {
            0.0
        };
        Emissions {
            t_co2e: ch4_tonnes * GWP_CH4 + direct_co2,
            ch4: Some(ch4_tonnes),
            n2o: None,
        }
    }

    fn incineration(kg: f64, props: &WasteProperties, recovery: f64, factor: &EmissionFactor) -> Emissions {
        let mut co2 = kg * factor.factor_value / KG_PER_TONNE;
        if props.is_biogenic {
            let biogenic_fraction = if props.organic_content > 0.0 {
                props.organic_content
            } else {
                DEFAULT_BIOGENIC_FRACTION
            };
            co2 *= 1.0 - biogenic_fraction;
        }
        let offset = co2 * recovery * INCINERATION_RECOVERY_CREDIT;
        Emissions {
            t_co2e: (co2 - offset).max(0.0),
            ..Emissions::default()
        }
    }

    fn recycling(kg: f64, props: &WasteProperties, factor: &EmissionFactor) -> Emissions {
        let potential = props
            .recycling_potential
            .unwrap_or(DEFAULT_RECYCLING_POTENTIAL);
        Emissions {
            t_co2e: -(kg * potential * factor.factor_value.abs() / KG_PER_TONNE),
            ..Emissions::default()
        }
    }

    fn composting(kg: f64) -> Emissions {
        let ch4_tonnes = kg * COMPOST_CH4_PER_KG / KG_PER_TONNE;
        let n2o_tonnes = kg * COMPOST_N2O_PER_KG / KG_PER_TONNE;
        Emissions {
            t_co2e: ch4_tonnes * GWP_CH4 + n2o_tonnes * GWP_N2O,
            ch4: Some(ch4_tonnes),
            n2o: Some(n2o_tonnes),
        }
    }

    fn anaerobic_digestion(kg: f64, props: &WasteProperties, capture: f64) -> Emissions {
        let produced_kg = kg * props.organic_content * DIGESTION_METHANE_YIELD;
        let escaped_kg = produced_kg * (1.0 - capture);
        let benefit = produced_kg * capture * DIGESTION_RECOVERY_CREDIT / KG_PER_TONNE;
        Emissions {
            t_co2e: (escaped_kg * GWP_CH4 / KG_PER_TONNE - benefit).max(0.0),
            ch4: Some(escaped_kg / KG_PER_TONNE),
            n2o: None,
        }
    }
}

impl Calculator for WasteCalculator {
    fn name(&self) -> &'static str {
        "waste"
    }

    fn supported_activity_types(&self) -> &'static [ActivityType] {
        ACTIVITY_TYPES
    }

    fn normalized_unit(&self, _activity_type: ActivityType) -> &'static str {
        "kg"
    }

    fn method_name(&self) -> &'static str {
        "Waste Treatment"
    }

    fn validate(&self, raw: &RawInput) -> Result<NormalizedInput, ValidationError> {
        let unit = self.normalized_unit(raw.activity_type());
        let input = base::normalize(&self.units, ACTIVITY_TYPES, unit, raw)?;

        let metadata = raw.metadata();
        let treatment = Treatment::for_activity(raw.activity_type());
        let (waste_type, _) = WasteProperties::from_metadata(metadata)?;
        metadata.fraction("methaneCaptureRate")?;
        metadata.fraction("energyRecoveryRate")?;

        Ok(input
            .tagged("treatmentMethod", treatment.as_str())
            .tagged("wasteType", waste_type))
    }

    fn calculate(
        &self,
        input: &NormalizedInput,
        factor: &EmissionFactor,
    ) -> CalcResult<CalculationResult> {
        base::ensure_factor_matches(input, factor)?;

        let metadata = input.metadata();
        let treatment = Treatment::for_activity(input.activity_type());
        let (waste_type, props) = WasteProperties::from_metadata(metadata)?;
        let capture = metadata
            .fraction("methaneCaptureRate")?
            .unwrap_or_else(|| treatment.default_capture_rate());
        let recovery = metadata
            .fraction("energyRecoveryRate")?
            .unwrap_or(DEFAULT_ENERGY_RECOVERY_RATE);

        let kg = input.normalized_amount();
        let emissions = match treatment {
            Treatment::Landfill => Self::landfill(kg, &props, capture, factor),
            Treatment::Incineration => Self::incineration(kg, &props, recovery, factor),
            Treatment::Recycling => Self::recycling(kg, &props, factor),
            Treatment::Composting => Self::composting(kg),
            Treatment::AnaerobicDigestion => Self::anaerobic_digestion(kg, &props, capture),
        };

        let mut breakdown = base::apply_factor(input, factor, factor.factor_value);
        breakdown.emission_factor_unit = factor.factor_unit.clone();
        breakdown.co2_amount = emissions.t_co2e;
        breakdown.co2e_amount = emissions.t_co2e;
        breakdown.ch4_amount = emissions.ch4;
        breakdown.n2o_amount = emissions.n2o;
        breakdown.methodology = format!(
            "{} waste treatment emissions calculation",
            treatment.description()
        );
        breakdown.assumptions = breakdown
            .assumptions
            .with("treatmentMethod", treatment.as_str())
            .with("wasteType", waste_type)
            .with(
                "wasteProperties",
                json!({
                    "organicContent": props.organic_content,
                    "moistureContent": props.moisture_content,
                    "carbonContent": props.carbon_content,
                    "recyclingPotential": props.recycling_potential,
                    "isBiogenic": props.is_biogenic,
                    "isHazardous": props.is_hazardous,
                }),
            )
            .with("methaneCaptureRate", capture)
            .with("energyRecoveryRate", recovery);

        Ok(base::finish(breakdown, self.method_name(), input, factor))
    }
}
