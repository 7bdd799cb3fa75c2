//! An auditor re-runs a stored record against a chosen factor.

use ghgcalc::{CalcError, FactorNotFound};

use crate::assert_close;
use crate::common::*;

#[test]
fn recalculate_against_published_grid_factor() {
    let service = service();

    let default = service.recalculate(ORG, "office-power-q1", None).unwrap();
    assert_close!(default.result.t_co2e, 5.04);

    let audited = service
        .recalculate(ORG, "office-power-q1", Some("grid-cn-2023"))
        .unwrap();
    assert_close!(audited.result.t_co2e, 6.972);

    let factor = audited.factor_used.as_ref().unwrap();
    assert_eq!(factor.id, "grid-cn-2023");
    assert_eq!(audited.factor_fingerprint, Some(factor.fingerprint()));
    assert_ne!(audited.factor_fingerprint, default.factor_fingerprint);
}

#[test]
fn recalculation_is_reproducible() {
    let service = service();
    let first = service.recalculate(ORG, "boiler-q1", None).unwrap();
    let second = service.recalculate(ORG, "boiler-q1", None).unwrap();

    assert_eq!(first.result.t_co2e.to_bits(), second.result.t_co2e.to_bits());
    assert_eq!(first.factor_fingerprint, second.factor_fingerprint);
}

#[test]
fn expired_factor_is_refused() {
    let err = service()
        .recalculate(ORG, "office-power-q1", Some("grid-cn-2021"))
        .unwrap_err();
    assert!(matches!(
        err,
        CalcError::FactorNotFound(FactorNotFound::Expired { ref id }) if id == "grid-cn-2021"
    ));
}

#[test]
fn another_organizations_factor_is_refused() {
    let err = service()
        .recalculate(OTHER_ORG, "globex-power", Some("grid-acme-ppa"))
        .unwrap_err();
    assert!(matches!(
        err,
        CalcError::FactorNotFound(FactorNotFound::Missing { .. })
    ));
}
