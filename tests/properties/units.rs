//! Property tests for unit conversion.

use std::collections::BTreeMap;

use proptest::prelude::*;

use ghgcalc::domain::services::{UnitError, UnitFamily};
use ghgcalc::UnitConverterRegistry;

fn units_by_family(registry: &UnitConverterRegistry) -> Vec<(UnitFamily, Vec<&'static str>)> {
    let mut families: BTreeMap<UnitFamily, Vec<&'static str>> = BTreeMap::new();
    for unit in registry.all_supported_units() {
        if let Some(family) = registry.family_of(unit) {
            families.entry(family).or_default().push(unit);
        }
    }
    families.into_iter().collect()
}

fn relative_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: converting to another unit of the same family and back is lossless.
    #[test]
    fn property_same_family_round_trip(
        family in 0usize..64,
        from in 0usize..64,
        to in 0usize..64,
        value in 0.0f64..1.0e6,
    ) {
        let registry = UnitConverterRegistry::new();
        let families = units_by_family(&registry);
        let (_, units) = &families[family % families.len()];
        let from = units[from % units.len()];
        let to = units[to % units.len()];

        let there = registry.convert(value, from, to).unwrap();
        let back = registry.convert(there, to, from).unwrap();
        prop_assert!(relative_close(back, value), "{} {} -> {} -> {}", value, from, to, back);
    }

    /// PROPERTY: units of different families never convert.
    #[test]
    fn property_cross_family_always_fails(
        a in 0usize..64,
        b in 1usize..64,
        from in 0usize..64,
        to in 0usize..64,
    ) {
        let registry = UnitConverterRegistry::new();
        let families = units_by_family(&registry);
        let a = a % families.len();
        let b = (a + 1 + b % (families.len() - 1)) % families.len();
        prop_assume!(a != b);

        let from = families[a].1[from % families[a].1.len()];
        let to = families[b].1[to % families[b].1.len()];

        let is_incompatible = matches!(
            registry.convert(1.0, from, to),
            Err(UnitError::IncompatibleUnitFamily { .. })
        );
        prop_assert!(is_incompatible, "{} -> {} converted", from, to);
    }

    /// PROPERTY: unknown unit strings are rejected, never guessed.
    #[test]
    fn property_unknown_units_rejected(unit in "[a-z]{1,3}_[a-z]{5,8}") {
        let registry = UnitConverterRegistry::new();
        prop_assert!(!registry.is_supported(&unit));
        let is_unsupported = matches!(
            registry.convert(1.0, &unit, "kg"),
            Err(UnitError::UnsupportedUnit { .. })
        );
        prop_assert!(is_unsupported);
    }
}
