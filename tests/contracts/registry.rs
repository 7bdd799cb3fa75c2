//! Registry contracts
//!
//! Each activity type maps to exactly one calculator, and the registry can
//! report on its own configuration.

use std::collections::BTreeSet;
use std::sync::Arc;

use ghgcalc::domain::services::calculators::FlightCalculator;
use ghgcalc::domain::services::RegistryError;
use ghgcalc::{
    ActivityType, CalculatorRegistry, DuplicatePolicy, EmissionScope, EngineConfig,
    UnitConverterRegistry,
};

fn units() -> Arc<UnitConverterRegistry> {
    Arc::new(UnitConverterRegistry::new())
}

/// CONTRACT: the built-in registry is complete and valid
#[test]
fn contract_builtin_registry_is_complete() {
    let registry = CalculatorRegistry::from_config(units(), &EngineConfig::default()).unwrap();

    let supported: BTreeSet<_> = registry.supported_activity_types().into_iter().collect();
    let all: BTreeSet<_> = ActivityType::ALL.into_iter().collect();
    assert_eq!(supported, all);

    let report = registry.validate_configuration();
    assert!(report.is_valid, "{:?}", report.errors);
}

/// CONTRACT: every registered type lands in exactly one scope group
#[test]
fn contract_scope_groups_partition_types() {
    let registry = CalculatorRegistry::from_config(units(), &EngineConfig::default()).unwrap();
    let groups = registry.activity_type_groups();

    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, ActivityType::ALL.len());
    for (scope, types) in &groups {
        for activity_type in types {
            assert_eq!(activity_type.scope(), *scope);
        }
    }
    assert!(groups[&EmissionScope::Scope1].contains(&ActivityType::Diesel));
}

/// CONTRACT: under the reject policy a second claim fails startup
#[test]
fn contract_reject_policy_fails_on_duplicate() {
    let mut config = EngineConfig::default();
    config.registry.duplicate_registration = DuplicatePolicy::Reject;
    let mut registry = CalculatorRegistry::from_config(units(), &config).unwrap();

    let err = registry
        .register(Arc::new(FlightCalculator::new(units())))
        .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateRegistration { .. }));
    assert!(registry.validate_configuration().is_valid);
}

/// CONTRACT: under the warn policy the last writer wins, and the duplicate is reported
#[test]
fn contract_warn_policy_overwrites_and_reports() {
    let mut registry = CalculatorRegistry::from_config(units(), &EngineConfig::default()).unwrap();
    registry
        .register(Arc::new(FlightCalculator::new(units())))
        .unwrap();

    assert!(registry.is_supported(ActivityType::FlightGeneral));
    let report = registry.validate_configuration();
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 7);
}
