//! Calculation inputs and results
//!
//! `RawInput` is what an operator recorded. `NormalizedInput` is the same
//! activity expressed in the canonical unit of its activity type; calculators
//! only ever see normalized input. Every adjustment (round trip,
//! annualization, rewritten units) produces a new value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::EmissionFactor;
use crate::domain::value_objects::{ActivityType, DataQuality, Metadata};
use crate::error::ValidationError;

/// Activity data as recorded, before unit normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInput {
    activity_type: ActivityType,
    amount: f64,
    unit: String,
    #[serde(default)]
    metadata: Metadata,
}

impl RawInput {
    pub fn new(activity_type: ActivityType, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            activity_type,
            amount,
            unit: unit.into(),
            metadata: Metadata::new(),
        }
    }

    /// Build from an untyped activity type string
    pub fn parse(
        activity_type: &str,
        amount: f64,
        unit: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(activity_type.parse()?, amount, unit))
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Copy of this input with a different amount and unit
    pub fn rewritten(&self, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            activity_type: self.activity_type,
            amount,
            unit: unit.into(),
            metadata: self.metadata.clone(),
        }
    }

    pub fn activity_type(&self) -> ActivityType {
        self.activity_type
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Validated input in the activity type's canonical unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedInput {
    activity_type: ActivityType,
    amount: f64,
    unit: String,
    normalized_amount: f64,
    normalized_unit: String,
    metadata: Metadata,
}

impl NormalizedInput {
    pub fn new(raw: &RawInput, normalized_amount: f64, normalized_unit: impl Into<String>) -> Self {
        Self {
            activity_type: raw.activity_type,
            amount: raw.amount,
            unit: raw.unit.clone(),
            normalized_amount,
            normalized_unit: normalized_unit.into(),
            metadata: raw.metadata.clone(),
        }
    }

    pub fn activity_type(&self) -> ActivityType {
        self.activity_type
    }

    pub fn original_amount(&self) -> f64 {
        self.amount
    }

    pub fn original_unit(&self) -> &str {
        &self.unit
    }

    pub fn normalized_amount(&self) -> f64 {
        self.normalized_amount
    }

    pub fn normalized_unit(&self) -> &str {
        &self.normalized_unit
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn with_normalized_amount(&self, normalized_amount: f64) -> Self {
        Self {
            normalized_amount,
            ..self.clone()
        }
    }

    /// Copy with an extra metadata entry
    pub fn tagged(&self, key: &str, value: impl Into<Value>) -> Self {
        Self {
            metadata: self.metadata.clone().with(key, value),
            ..self.clone()
        }
    }
}

/// Audit trail of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationBreakdown {
    pub original_amount: f64,
    pub original_unit: String,
    pub normalized_amount: f64,
    pub normalized_unit: String,
    /// Factor value actually applied, after any adjustment
    pub emission_factor: f64,
    pub emission_factor_unit: String,
    pub gwp: f64,
    /// Tonnes of the factor's gas before GWP
    pub co2_amount: f64,
    /// Tonnes CO2e after GWP
    pub co2e_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ch4_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n2o_amount: Option<f64>,
    pub methodology: String,
    pub assumptions: Metadata,
}

impl CalculationBreakdown {
    /// Breakdown pre-filled from the input and the unadjusted factor.
    ///
    /// Emission amounts start at zero; calculators fill them in.
    pub fn for_input(input: &NormalizedInput, factor: &EmissionFactor) -> Self {
        Self {
            original_amount: input.original_amount(),
            original_unit: input.original_unit().to_string(),
            normalized_amount: input.normalized_amount(),
            normalized_unit: input.normalized_unit().to_string(),
            emission_factor: factor.factor_value,
            emission_factor_unit: format!("kg CO2e/{}", input.normalized_unit()),
            gwp: factor.gwp,
            co2_amount: 0.0,
            co2e_amount: 0.0,
            ch4_amount: None,
            n2o_amount: None,
            methodology: factor
                .methodology
                .clone()
                .unwrap_or_else(|| "Direct multiplication".to_string()),
            assumptions: factor.assumptions.merged(input.metadata()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    #[serde(rename = "tCO2e")]
    pub t_co2e: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<CalculationBreakdown>,
    pub method: String,
    pub data_quality: DataQuality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<f64>,
}

impl CalculationResult {
    /// Method name carried by batch placeholders
    pub const ERROR_METHOD: &'static str = "Error";

    /// Zero-emission stand-in for a batch item that failed
    pub fn error_placeholder() -> Self {
        Self {
            t_co2e: 0.0,
            breakdown: None,
            method: Self::ERROR_METHOD.to_string(),
            data_quality: DataQuality::Estimated,
            uncertainty: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.breakdown.is_none() && self.method == Self::ERROR_METHOD
    }
}
