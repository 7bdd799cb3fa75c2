//! Property tests for emission factor selection.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use ghgcalc::{ActivityType, EmissionFactor, EmissionFactorResolver};

fn candidate(index: usize, year: i32, priority: i32, owner: Option<&str>) -> EmissionFactor {
    let factor = EmissionFactor::new(
        format!("ef-{index}"),
        ActivityType::NaturalGas,
        "GLOBAL",
        year,
        1.9,
        "kg CO2e/m3",
    )
    .with_priority(priority);
    match owner {
        Some(owner) => factor.for_organization(owner),
        None => factor,
    }
}

fn candidates() -> impl Strategy<Value = Vec<EmissionFactor>> {
    proptest::collection::vec(
        (
            2015i32..2025,
            -5i32..5,
            prop_oneof![Just(None), Just(Some("org-a")), Just(Some("org-b"))],
        ),
        1..12,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (year, priority, owner))| candidate(i, year, priority, owner))
            .collect()
    })
}

fn resolver() -> EmissionFactorResolver {
    EmissionFactorResolver::new(ActivityType::NaturalGas, "org-a")
        .as_of(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: when the organization owns any eligible factor, one of its own wins.
    #[test]
    fn property_owned_factor_wins(candidates in candidates()) {
        let owns_any = candidates
            .iter()
            .any(|f| f.organization_id.as_deref() == Some("org-a"));

        match resolver().resolve(&candidates) {
            Ok(chosen) => {
                prop_assert_ne!(chosen.organization_id.as_deref(), Some("org-b"));
                if owns_any {
                    prop_assert_eq!(chosen.organization_id.as_deref(), Some("org-a"));
                }
            }
            Err(_) => {
                let only_foreign = candidates
                    .iter()
                    .all(|f| f.organization_id.as_deref() == Some("org-b"));
                prop_assert!(only_foreign);
            }
        }
    }

    /// PROPERTY: among equally owned factors the newest year wins.
    #[test]
    fn property_newest_year_among_peers(candidates in candidates()) {
        if let Ok(chosen) = resolver().resolve(&candidates) {
            let newest_peer = candidates
                .iter()
                .filter(|f| f.organization_id == chosen.organization_id)
                .map(|f| f.year)
                .max();
            prop_assert_eq!(Some(chosen.year), newest_peer);
        }
    }
}
