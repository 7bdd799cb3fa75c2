//! Factor selection contracts

use chrono::{TimeZone, Utc};

use ghgcalc::{ActivityType, EmissionFactor, EmissionFactorResolver, FactorNotFound};

fn candidate(id: &str) -> EmissionFactor {
    EmissionFactor::new(id, ActivityType::Electricity, "CN", 2023, 0.581, "kg CO2e/kWh")
        .with_source("IEA")
}

fn resolver(org: &str) -> EmissionFactorResolver {
    EmissionFactorResolver::new(ActivityType::Electricity, org)
        .as_of(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
}

/// CONTRACT: an organization's own factor beats an otherwise identical global one
#[test]
fn contract_organization_factor_wins_ties() {
    for owned_first in [true, false] {
        let owned = candidate("owned").for_organization("org-a");
        let global = candidate("global");
        let candidates = if owned_first {
            vec![owned, global]
        } else {
            vec![global, owned]
        };

        let chosen = resolver("org-a").resolve(&candidates).unwrap();
        assert_eq!(chosen.id, "owned");
    }
}

/// CONTRACT: factors owned by someone else are never selected
#[test]
fn contract_foreign_factors_are_invisible() {
    let candidates = vec![candidate("foreign").for_organization("org-b").with_priority(100)];
    assert!(matches!(
        resolver("org-a").resolve(&candidates),
        Err(FactorNotFound::NoCandidates { .. })
    ));

    let explicit = resolver("org-a").with_factor_id(Some("foreign".to_string()));
    assert!(matches!(
        explicit.resolve(&candidates),
        Err(FactorNotFound::Missing { .. })
    ));
}

/// CONTRACT: ranking is independent of candidate order except for complete ties
#[test]
fn contract_ranking_ignores_order() {
    let newer = candidate("newer");
    let mut older = candidate("older");
    older.year = 2020;
    let mut boosted = candidate("boosted");
    boosted.year = 2022;
    boosted.priority = 50;

    let forward = vec![older.clone(), boosted.clone(), newer.clone()];
    let backward = vec![newer, boosted, older];

    let a: Vec<_> = resolver("org-a").ranked(&forward).iter().map(|f| f.id.clone()).collect();
    let b: Vec<_> = resolver("org-a").ranked(&backward).iter().map(|f| f.id.clone()).collect();
    assert_eq!(a, vec!["newer", "boosted", "older"]);
    assert_eq!(a, b);
}
