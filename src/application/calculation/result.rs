//! Calculation Results
//!
//! Per-record outcomes and batch aggregates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ActivityRecord, CalculationResult, EmissionFactor};
use crate::domain::value_objects::Fingerprint;

/// Outcome of calculating one activity record.
///
/// This is what a persistence collaborator stores against the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCalculation {
    pub activity_record_id: String,
    pub result: CalculationResult,
    /// Factor snapshot; absent on error placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor_used: Option<EmissionFactor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor_fingerprint: Option<Fingerprint>,
    /// Failure message for placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecordCalculation {
    pub fn success(
        activity_record_id: impl Into<String>,
        result: CalculationResult,
        factor: EmissionFactor,
    ) -> Self {
        Self {
            activity_record_id: activity_record_id.into(),
            result,
            factor_fingerprint: Some(factor.fingerprint()),
            factor_used: Some(factor),
            error: None,
        }
    }

    pub fn failure(activity_record_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            activity_record_id: activity_record_id.into(),
            result: CalculationResult::error_placeholder(),
            factor_used: None,
            factor_fingerprint: None,
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Tonnes CO2e keyed by record scope, category and activity type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub by_scope: BTreeMap<String, f64>,
    pub by_category: BTreeMap<String, f64>,
    pub by_activity_type: BTreeMap<String, f64>,
}

impl BatchSummary {
    pub fn add(&mut self, record: &ActivityRecord, t_co2e: f64) {
        *self.by_scope.entry(record.scope.clone()).or_default() += t_co2e;
        *self.by_category.entry(record.category.clone()).or_default() += t_co2e;
        *self
            .by_activity_type
            .entry(record.activity_type.clone())
            .or_default() += t_co2e;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCalculationResult {
    pub total_emissions: f64,
    /// Number of records processed, failures included
    pub calculation_count: usize,
    /// One entry per record, in input order
    pub results: Vec<RecordCalculation>,
    pub summary: BatchSummary,
}

impl BatchCalculationResult {
    pub fn failures(&self) -> impl Iterator<Item = &RecordCalculation> {
        self.results.iter().filter(|r| r.is_error())
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_error()).count()
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}
