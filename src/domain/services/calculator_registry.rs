//! Calculator registry
//!
//! Maps every activity type to the calculator that owns it. Built once at
//! startup and read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::domain::services::calculators::{
    BusinessTravelCalculator, Calculator, ElectricityCalculator, FlightCalculator,
    FreightCalculator, FuelCombustionCalculator, WasteCalculator,
};
use crate::domain::services::units::UnitConverterRegistry;
use crate::domain::value_objects::{ActivityType, DuplicatePolicy, EmissionScope};

/// Activity types a usable registry must cover unless configured otherwise
pub const DEFAULT_REQUIRED_ACTIVITY_TYPES: [ActivityType; 4] = [
    ActivityType::Electricity,
    ActivityType::NaturalGas,
    ActivityType::Diesel,
    ActivityType::Gasoline,
];

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("activity type '{activity_type}' is already handled by calculator '{existing}' (attempted by '{attempted}')")]
    DuplicateRegistration {
        activity_type: ActivityType,
        existing: &'static str,
        attempted: &'static str,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStatistics {
    pub total_calculators: usize,
    pub total_activity_types: usize,
    pub scope1_types: usize,
    pub scope2_types: usize,
    pub scope3_types: usize,
    pub activity_types: Vec<ActivityType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

pub struct CalculatorRegistry {
    calculators: BTreeMap<ActivityType, Arc<dyn Calculator>>,
    /// Every calculator that claimed a type, in registration order
    claims: BTreeMap<ActivityType, Vec<&'static str>>,
    duplicate_policy: DuplicatePolicy,
    required: Vec<ActivityType>,
}

impl Default for CalculatorRegistry {
    fn default() -> Self {
        Self::new(DuplicatePolicy::default())
    }
}

impl fmt::Debug for CalculatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let owners: BTreeMap<&str, &str> = self
            .calculators
            .iter()
            .map(|(t, c)| (t.as_str(), c.name()))
            .collect();
        f.debug_struct("CalculatorRegistry")
            .field("calculators", &owners)
            .field("duplicate_policy", &self.duplicate_policy)
            .field("required", &self.required)
            .finish()
    }
}

impl CalculatorRegistry {
    /// Empty registry
    pub fn new(duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            calculators: BTreeMap::new(),
            claims: BTreeMap::new(),
            duplicate_policy,
            required: DEFAULT_REQUIRED_ACTIVITY_TYPES.to_vec(),
        }
    }

    pub fn with_required_activity_types(mut self, required: Vec<ActivityType>) -> Self {
        self.required = required;
        self
    }

    /// Registry holding every built-in calculator, configured from `config`
    pub fn from_config(
        units: Arc<UnitConverterRegistry>,
        config: &EngineConfig,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new(config.registry.duplicate_registration)
            .with_required_activity_types(config.registry.required_activity_types.clone());

        registry.register(Arc::new(ElectricityCalculator::new(units.clone())))?;
        registry.register(Arc::new(FuelCombustionCalculator::new(units.clone())))?;
        registry.register(Arc::new(FlightCalculator::new(units.clone())))?;
        registry.register(Arc::new(FreightCalculator::new(units.clone())))?;
        registry.register(Arc::new(WasteCalculator::new(units.clone())))?;
        registry.register(Arc::new(
            BusinessTravelCalculator::new(units)
                .with_workdays_per_month(config.travel.workdays_per_month),
        ))?;

        Ok(registry)
    }

    /// Register `calculator` under every activity type it supports.
    ///
    /// Under `DuplicatePolicy::Reject` nothing is registered when any of its
    /// types is already taken.
    pub fn register(&mut self, calculator: Arc<dyn Calculator>) -> Result<(), RegistryError> {
        let name = calculator.name();
        let types = calculator.supported_activity_types();

        if self.duplicate_policy == DuplicatePolicy::Reject {
            if let Some((activity_type, existing)) = types
                .iter()
                .find_map(|t| self.calculators.get(t).map(|c| (*t, c.name())))
            {
                return Err(RegistryError::DuplicateRegistration {
                    activity_type,
                    existing,
                    attempted: name,
                });
            }
        }

        for activity_type in types {
            if let Some(previous) = self.calculators.get(activity_type) {
                tracing::warn!(
                    activity_type = activity_type.as_str(),
                    previous = previous.name(),
                    calculator = name,
                    "overwriting calculator registration"
                );
            }
            self.calculators.insert(*activity_type, calculator.clone());
            self.claims.entry(*activity_type).or_default().push(name);
        }

        tracing::debug!(
            calculator = name,
            activity_types = types.len(),
            "registered calculator"
        );
        Ok(())
    }

    pub fn get(&self, activity_type: ActivityType) -> Option<Arc<dyn Calculator>> {
        self.calculators.get(&activity_type).cloned()
    }

    /// Lookup by activity type string; unknown strings yield `None`
    pub fn get_by_name(&self, activity_type: &str) -> Option<Arc<dyn Calculator>> {
        activity_type
            .parse::<ActivityType>()
            .ok()
            .and_then(|t| self.get(t))
    }

    pub fn is_supported(&self, activity_type: ActivityType) -> bool {
        self.calculators.contains_key(&activity_type)
    }

    pub fn supported_activity_types(&self) -> Vec<ActivityType> {
        self.calculators.keys().copied().collect()
    }

    /// Registered activity types grouped by reporting scope
    pub fn activity_type_groups(&self) -> BTreeMap<EmissionScope, Vec<ActivityType>> {
        let mut groups: BTreeMap<EmissionScope, Vec<ActivityType>> =
            EmissionScope::ALL.iter().map(|s| (*s, Vec::new())).collect();
        for activity_type in self.calculators.keys() {
            groups
                .entry(activity_type.scope())
                .or_default()
                .push(*activity_type);
        }
        groups
    }

    pub fn statistics(&self) -> RegistryStatistics {
        let groups = self.activity_type_groups();
        let count = |scope| groups.get(&scope).map_or(0, Vec::len);

        let mut names: Vec<&str> = self.calculators.values().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();

        RegistryStatistics {
            total_calculators: names.len(),
            total_activity_types: self.calculators.len(),
            scope1_types: count(EmissionScope::Scope1),
            scope2_types: count(EmissionScope::Scope2),
            scope3_types: count(EmissionScope::Scope3),
            activity_types: self.supported_activity_types(),
        }
    }

    /// Check required coverage and duplicate claims
    pub fn validate_configuration(&self) -> ConfigurationReport {
        let mut errors = Vec::new();

        for required in &self.required {
            if !self.is_supported(*required) {
                errors.push(format!(
                    "missing calculator for required activity type: {}",
                    required
                ));
            }
        }

        for (activity_type, claimants) in &self.claims {
            if claimants.len() > 1 {
                errors.push(format!(
                    "activity type {} registered by multiple calculators: {}",
                    activity_type,
                    claimants.join(", ")
                ));
            }
        }

        ConfigurationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
