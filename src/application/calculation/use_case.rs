//! Calculation Use Case
//!
//! Single, batch and multimodal calculations. The flow for one input is
//! calculator lookup, validation, factor resolution, then the calculation
//! itself. Business rules live in the calculators and the resolver.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::EngineConfig;
use crate::domain::entities::{ActivityRecord, CalculationResult, EmissionFactor, RawInput};
use crate::domain::ports::{ActivityRepository, FactorRepository};
use crate::domain::services::calculators::{FreightCalculator, FreightSegment};
use crate::domain::services::{
    Calculator, CalculatorRegistry, ConfigurationReport, EmissionFactorResolver,
    RegistryStatistics, UnitConverterRegistry,
};
use crate::domain::value_objects::{ActivityType, EmissionScope};
use crate::error::{CalcError, CalcResult, ValidationError};

use super::options::BatchRequest;
use super::result::{BatchCalculationResult, BatchSummary, RecordCalculation};

/// Calculation service - orchestrates calculators, factor selection and storage
///
/// Parameterized by its storage ports so it can run against any backend.
pub struct CalculationService<F, A>
where
    F: FactorRepository,
    A: ActivityRepository,
{
    units: Arc<UnitConverterRegistry>,
    registry: Arc<CalculatorRegistry>,
    factors: F,
    activities: A,
    as_of: Option<DateTime<Utc>>,
}

impl<F, A> CalculationService<F, A>
where
    F: FactorRepository,
    A: ActivityRepository,
{
    pub fn new(
        units: Arc<UnitConverterRegistry>,
        registry: Arc<CalculatorRegistry>,
        factors: F,
        activities: A,
    ) -> Self {
        Self {
            units,
            registry,
            factors,
            activities,
            as_of: None,
        }
    }

    /// Service with the built-in calculators configured from `config`
    pub fn from_config(config: &EngineConfig, factors: F, activities: A) -> CalcResult<Self> {
        let units = Arc::new(UnitConverterRegistry::new());
        let registry = CalculatorRegistry::from_config(units.clone(), config)?;
        Ok(Self::new(units, Arc::new(registry), factors, activities))
    }

    /// Evaluate factor validity at a fixed moment instead of now
    pub fn with_as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn registry(&self) -> &CalculatorRegistry {
        &self.registry
    }

    fn calculator_for(&self, activity_type: ActivityType) -> CalcResult<Arc<dyn Calculator>> {
        self.registry.get(activity_type).ok_or_else(|| {
            ValidationError::UnsupportedActivityType {
                activity_type: activity_type.to_string(),
            }
            .into()
        })
    }

    /// Validate and calculate `raw` against a known factor
    pub fn calculate_with_factor(
        &self,
        raw: &RawInput,
        factor: &EmissionFactor,
    ) -> CalcResult<CalculationResult> {
        let calculator = self.calculator_for(raw.activity_type())?;
        let input = calculator.validate(raw)?;
        calculator.calculate(&input, factor)
    }

    /// Pick the factor for `activity_type`, or load and check an explicit one
    pub fn resolve_factor(
        &self,
        organization_id: &str,
        activity_type: ActivityType,
        factor_id: Option<&str>,
    ) -> CalcResult<EmissionFactor> {
        let mut resolver = EmissionFactorResolver::new(activity_type, organization_id)
            .with_factor_id(factor_id.map(str::to_string));
        if let Some(as_of) = self.as_of {
            resolver = resolver.as_of(as_of);
        }

        let factor = match factor_id {
            Some(id) => {
                let found = self.factors.find_factor_by_id(id)?;
                resolver.select_explicit(found.as_ref())?.clone()
            }
            None => {
                let candidates = self
                    .factors
                    .find_candidate_factors(activity_type, organization_id)?;
                resolver.resolve(&candidates)?.clone()
            }
        };
        Ok(factor)
    }

    /// Calculate `raw` for an organization, resolving the factor through storage
    pub fn calculate(
        &self,
        organization_id: &str,
        raw: &RawInput,
        factor_id: Option<&str>,
    ) -> CalcResult<CalculationResult> {
        self.calculate_resolved(organization_id, raw, factor_id)
            .map(|(result, _)| result)
    }

    fn calculate_resolved(
        &self,
        organization_id: &str,
        raw: &RawInput,
        factor_id: Option<&str>,
    ) -> CalcResult<(CalculationResult, EmissionFactor)> {
        let calculator = self.calculator_for(raw.activity_type())?;
        let input = calculator.validate(raw)?;
        let factor = self.resolve_factor(organization_id, raw.activity_type(), factor_id)?;
        let result = calculator.calculate(&input, &factor)?;
        Ok((result, factor))
    }

    fn calculate_record(
        &self,
        organization_id: &str,
        record: &ActivityRecord,
        factor_id: Option<&str>,
    ) -> CalcResult<RecordCalculation> {
        let raw = record.to_raw_input()?;
        let (result, factor) = self.calculate_resolved(organization_id, &raw, factor_id)?;
        Ok(RecordCalculation::success(record.id.clone(), result, factor))
    }

    /// Calculate every record selected by `request`
    pub fn batch_calculate(&self, request: &BatchRequest) -> CalcResult<BatchCalculationResult> {
        let records = self
            .activities
            .find_records(&request.organization_id, &request.filters)?;
        if records.is_empty() {
            return Err(CalcError::NoActivityRecords);
        }
        Ok(self.batch_calculate_records(&request.organization_id, &records))
    }

    /// Calculate `records` in order; a failing record becomes a placeholder
    pub fn batch_calculate_records(
        &self,
        organization_id: &str,
        records: &[ActivityRecord],
    ) -> BatchCalculationResult {
        tracing::info!(
            organization_id,
            records = records.len(),
            "starting batch calculation"
        );

        let mut results = Vec::with_capacity(records.len());
        let mut total_emissions = 0.0;
        let mut summary = BatchSummary::default();

        for record in records {
            match self.calculate_record(organization_id, record, None) {
                Ok(calculation) => {
                    let t_co2e = calculation.result.t_co2e;
                    total_emissions += t_co2e;
                    summary.add(record, t_co2e);
                    tracing::debug!(record_id = %record.id, t_co2e, "record calculated");
                    results.push(calculation);
                }
                Err(err) => {
                    tracing::error!(record_id = %record.id, error = %err, "record calculation failed");
                    results.push(RecordCalculation::failure(record.id.clone(), err.to_string()));
                }
            }
        }

        let failed = results.iter().filter(|r| r.is_error()).count();
        tracing::info!(
            organization_id,
            total_emissions,
            failed,
            "batch calculation finished"
        );

        BatchCalculationResult {
            total_emissions,
            calculation_count: results.len(),
            results,
            summary,
        }
    }

    /// Recalculate a stored record, optionally against a specific factor
    pub fn recalculate(
        &self,
        organization_id: &str,
        record_id: &str,
        factor_id: Option<&str>,
    ) -> CalcResult<RecordCalculation> {
        let record = self
            .activities
            .find_record(organization_id, record_id)?
            .ok_or_else(|| CalcError::RecordNotFound {
                id: record_id.to_string(),
            })?;

        let calculation = self.calculate_record(organization_id, &record, factor_id)?;
        tracing::info!(
            record_id,
            t_co2e = calculation.result.t_co2e,
            "record recalculated"
        );
        Ok(calculation)
    }

    /// Multimodal freight shipment, each segment with its own resolved factor
    pub fn calculate_multimodal(
        &self,
        organization_id: &str,
        segments: &[FreightSegment],
    ) -> CalcResult<CalculationResult> {
        FreightCalculator::new(self.units.clone()).calculate_multimodal(segments, |activity_type| {
            self.resolve_factor(organization_id, activity_type, None)
        })
    }

    pub fn supported_activity_types(&self) -> Vec<ActivityType> {
        self.registry.supported_activity_types()
    }

    pub fn scope_groups(&self) -> BTreeMap<EmissionScope, Vec<ActivityType>> {
        self.registry.activity_type_groups()
    }

    pub fn statistics(&self) -> RegistryStatistics {
        self.registry.statistics()
    }

    pub fn validate_configuration(&self) -> ConfigurationReport {
        self.registry.validate_configuration()
    }
}
