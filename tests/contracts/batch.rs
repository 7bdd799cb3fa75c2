//! Batch contracts
//!
//! A batch always reports every selected record, in order, and one bad
//! record never poisons the others.

use ghgcalc::{ActivityRecord, BatchRequest, CalculationResult};

use crate::assert_close;
use crate::common::*;

/// CONTRACT: one invalid item out of N yields N results and N-1 successes
#[test]
fn contract_invalid_item_becomes_placeholder() {
    let mut records = records();
    records.insert(
        2,
        ActivityRecord::new("broken", ORG, "electricity", -40.0, "kWh"),
    );
    let expected_total: f64 = {
        let clean = service_with(records.iter().filter(|r| r.id != "broken").cloned().collect());
        clean.batch_calculate(&BatchRequest::new(ORG)).unwrap().total_emissions
    };

    let result = service_with(records).batch_calculate(&BatchRequest::new(ORG)).unwrap();

    assert_eq!(result.calculation_count, 5);
    assert_eq!(result.results.len(), 5);
    assert_eq!(result.success_count(), 4);
    assert_eq!(result.results[2].activity_record_id, "broken");

    let placeholder = &result.results[2].result;
    assert_eq!(placeholder.method, CalculationResult::ERROR_METHOD);
    assert_eq!(placeholder.t_co2e, 0.0);
    assert!(placeholder.breakdown.is_none());

    assert_close!(result.total_emissions, expected_total);
}

/// CONTRACT: unknown activity types are item failures, not batch failures
#[test]
fn contract_unknown_activity_type_is_isolated() {
    let mut records = records();
    records.push(ActivityRecord::new("mystery", ORG, "teleportation", 1.0, "km"));

    let result = service_with(records).batch_calculate(&BatchRequest::new(ORG)).unwrap();
    let failure = result.failures().next().unwrap();
    assert_eq!(failure.activity_record_id, "mystery");
    assert!(failure.error.as_deref().unwrap().contains("teleportation"));
}

/// CONTRACT: the summary maps add up to the total
#[test]
fn contract_summary_matches_total() {
    let result = service().batch_calculate(&BatchRequest::new(ORG)).unwrap();
    for map in [
        &result.summary.by_scope,
        &result.summary.by_category,
        &result.summary.by_activity_type,
    ] {
        assert_close!(map.values().sum::<f64>(), result.total_emissions);
    }
}
