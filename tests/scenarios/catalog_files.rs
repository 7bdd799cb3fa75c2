//! Catalog and activity data arrive as JSON exports.

use std::fs;

use tempfile::tempdir;

use ghgcalc::infrastructure::{InMemoryActivityRepository, InMemoryFactorRepository};
use ghgcalc::{BatchRequest, CalculationService, EngineConfig};

use crate::assert_close;
use crate::common::*;

const ACTIVITY_EXPORT: &str = r#"[
    {"id": "a1", "organizationId": "org-acme", "activityType": "waste_treatment_general",
     "amount": 2, "unit": "t", "scope": "scope_3", "category": "waste",
     "metadata": {"wasteType": "food_waste"}},
    {"id": "a2", "organizationId": "org-acme", "activityType": "electricity",
     "amount": 1000, "unit": "kWh", "scope": "scope_2", "category": "purchased_energy",
     "dataQuality": "measured",
     "periodStart": "2024-01-01T00:00:00Z", "periodEnd": "2024-01-31T23:59:59Z"}
]"#;

#[test]
fn catalog_loads_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("factors.json");
    fs::write(&path, FACTOR_CATALOG).unwrap();

    let catalog = InMemoryFactorRepository::from_json_file(&path).unwrap();
    assert_eq!(catalog.len(), 10);
}

#[test]
fn malformed_catalog_is_rejected() {
    let err = InMemoryFactorRepository::from_json_str("[{\"id\": 1}]").unwrap_err();
    assert!(err.to_string().contains("invalid emission factor catalog"));
}

#[test]
fn exported_activities_calculate() {
    let activities = InMemoryActivityRepository::from_json_str(ACTIVITY_EXPORT).unwrap();
    let service = CalculationService::from_config(&EngineConfig::default(), factors(), activities)
        .unwrap()
        .with_as_of(as_of());

    let report = service.batch_calculate(&BatchRequest::new(ORG)).unwrap();
    assert_eq!(report.calculation_count, 2);

    let electricity = &report.results[1];
    assert_close!(electricity.result.t_co2e, 0.42);
    assert_eq!(electricity.result.data_quality, ghgcalc::DataQuality::Measured);
}
