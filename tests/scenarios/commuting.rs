//! Employee commuting with a site-specific working calendar.

use std::fs;

use tempfile::tempdir;

use ghgcalc::infrastructure::InMemoryActivityRepository;
use ghgcalc::{ActivityRecord, BatchRequest, CalculationService, EngineConfig, Metadata};

use crate::assert_close;
use crate::common::*;

fn commute() -> ActivityRecord {
    ActivityRecord::new("commute-jane", ORG, "employee_commuting", 15.0, "km")
        .with_category("employee_commuting")
        .with_metadata(
            Metadata::new()
                .with("distance", 15.0)
                .with("transportMode", "gasoline_vehicle"),
        )
}

#[test]
fn configured_workdays_drive_monthly_distance() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ghgcalc.toml");
    fs::write(&path, "[travel]\nworkdays_per_month = 20\n").unwrap();
    let config = EngineConfig::load(&path).unwrap();

    let service = CalculationService::from_config(
        &config,
        factors(),
        InMemoryActivityRepository::new(vec![commute()]),
    )
    .unwrap()
    .with_as_of(as_of());

    let report = service.batch_calculate(&BatchRequest::new(ORG)).unwrap();
    // 15 km each way, 20 days, 0.1 kg/km
    assert_close!(report.total_emissions, 0.06);

    let breakdown = report.results[0].result.breakdown.as_ref().unwrap();
    assert_eq!(breakdown.normalized_amount, 600.0);
}

#[test]
fn default_calendar_and_zero_emission_modes() {
    let cycling = ActivityRecord::new("commute-sam", ORG, "employee_commuting", 5.0, "km")
        .with_metadata(
            Metadata::new()
                .with("distance", 5.0)
                .with("transportMode", "cycling"),
        );
    let report = service_with(vec![commute(), cycling])
        .batch_calculate(&BatchRequest::new(ORG))
        .unwrap();

    assert!(report.is_success());
    assert_close!(report.results[0].result.t_co2e, 15.0 * 2.0 * 22.0 * 0.1 / 1000.0);
    assert_eq!(report.results[1].result.t_co2e, 0.0);
}
