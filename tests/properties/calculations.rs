//! Property tests for calculators.

use std::sync::Arc;

use proptest::prelude::*;

use ghgcalc::{
    ActivityType, CalculatorRegistry, EmissionFactor, EngineConfig, Metadata, RawInput,
    UnitConverterRegistry,
};

fn registry() -> CalculatorRegistry {
    CalculatorRegistry::from_config(
        Arc::new(UnitConverterRegistry::new()),
        &EngineConfig::default(),
    )
    .unwrap()
}

fn grid(value: f64) -> EmissionFactor {
    EmissionFactor::new("grid", ActivityType::Electricity, "CN", 2023, value, "kg CO2e/kWh")
}

fn electricity(registry: &CalculatorRegistry, raw: &RawInput, factor: &EmissionFactor) -> f64 {
    let calculator = registry.get(ActivityType::Electricity).unwrap();
    let input = calculator.validate(raw).unwrap();
    calculator.calculate(&input, factor).unwrap().t_co2e
}

fn relative_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: emissions scale linearly with the activity amount.
    #[test]
    fn property_emissions_scale_linearly(
        amount in 0.0f64..1.0e6,
        k in 0.0f64..100.0,
        factor in 0.0f64..2.0,
    ) {
        let registry = registry();
        let factor = grid(factor);
        let base = electricity(&registry, &RawInput::new(ActivityType::Electricity, amount, "kWh"), &factor);
        let scaled = electricity(&registry, &RawInput::new(ActivityType::Electricity, amount * k, "kWh"), &factor);
        prop_assert!(relative_close(scaled, base * k));
    }

    /// PROPERTY: the unit an amount is reported in does not change the result.
    #[test]
    fn property_input_unit_is_irrelevant(mwh in 0.0f64..1.0e4, factor in 0.0f64..2.0) {
        let registry = registry();
        let factor = grid(factor);
        let in_mwh = electricity(&registry, &RawInput::new(ActivityType::Electricity, mwh, "MWh"), &factor);
        let in_kwh = electricity(&registry, &RawInput::new(ActivityType::Electricity, mwh * 1000.0, "kWh"), &factor);
        prop_assert!(relative_close(in_mwh, in_kwh));
    }

    /// PROPERTY: renewable contracts zero out market-based electricity.
    #[test]
    fn property_renewable_contracts_are_zero(
        amount in 0.0f64..1.0e6,
        contract in prop_oneof![Just("renewable_ppa"), Just("green_certificate")],
    ) {
        let registry = registry();
        let raw = RawInput::new(ActivityType::Electricity, amount, "kWh").with_metadata(
            Metadata::new()
                .with("method", "market_based")
                .with("contractType", contract),
        );
        prop_assert_eq!(electricity(&registry, &raw, &grid(0.581)), 0.0);
    }

    /// PROPERTY: negative or non-finite amounts never validate.
    #[test]
    fn property_invalid_amounts_rejected(
        index in 0usize..64,
        amount in prop_oneof![
            (-1.0e6f64..-1.0e-9),
            Just(f64::NAN),
            Just(f64::INFINITY),
        ],
    ) {
        let registry = registry();
        let activity_type = ActivityType::ALL[index % ActivityType::ALL.len()];
        let calculator = registry.get(activity_type).unwrap();
        let raw = RawInput::new(activity_type, amount, calculator.normalized_unit(activity_type));
        prop_assert!(calculator.validate(&raw).is_err());
    }
}
