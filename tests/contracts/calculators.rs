//! Calculator contracts
//!
//! Every registered calculator validates input the same way and computes
//! deterministically against the factor it is given.

use std::sync::Arc;

use ghgcalc::{
    ActivityType, CalcError, CalculatorRegistry, EmissionFactor, EngineConfig, Metadata,
    RawInput, UnitConverterRegistry, ValidationError,
};

use crate::assert_close;

fn registry() -> CalculatorRegistry {
    CalculatorRegistry::from_config(
        Arc::new(UnitConverterRegistry::new()),
        &EngineConfig::default(),
    )
    .unwrap()
}

fn unit_factor(activity_type: ActivityType, unit: &str) -> EmissionFactor {
    EmissionFactor::new(
        format!("ef-{}", activity_type),
        activity_type,
        "GLOBAL",
        2023,
        1.0,
        format!("kg CO2e/{}", unit),
    )
}

/// CONTRACT: a zero amount yields zero emissions for every activity type
#[test]
fn contract_zero_amount_is_zero_emissions() {
    let registry = registry();
    for activity_type in ActivityType::ALL {
        let calculator = registry.get(activity_type).unwrap();
        let unit = calculator.normalized_unit(activity_type);
        let raw = RawInput::new(activity_type, 0.0, unit);

        let input = calculator.validate(&raw).unwrap();
        let result = calculator
            .calculate(&input, &unit_factor(activity_type, unit))
            .unwrap();

        assert_eq!(result.t_co2e, 0.0, "{activity_type}");
    }
}

/// CONTRACT: identical inputs give bit-identical results
#[test]
fn contract_calculation_is_deterministic() {
    let registry = registry();
    for activity_type in ActivityType::ALL {
        let calculator = registry.get(activity_type).unwrap();
        let unit = calculator.normalized_unit(activity_type);
        let factor = unit_factor(activity_type, unit);
        let raw = RawInput::new(activity_type, 1234.5, unit);

        let first = calculator.calculate(&calculator.validate(&raw).unwrap(), &factor).unwrap();
        let second = calculator.calculate(&calculator.validate(&raw).unwrap(), &factor).unwrap();

        assert_eq!(first.t_co2e.to_bits(), second.t_co2e.to_bits(), "{activity_type}");
        assert_eq!(first, second);
    }
}

/// CONTRACT: negative and non-finite amounts never reach a calculation
#[test]
fn contract_invalid_amounts_are_rejected() {
    let registry = registry();
    for activity_type in ActivityType::ALL {
        let calculator = registry.get(activity_type).unwrap();
        let unit = calculator.normalized_unit(activity_type);
        for amount in [-1.0, f64::NAN, f64::INFINITY] {
            let err = calculator
                .validate(&RawInput::new(activity_type, amount, unit))
                .unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidAmount { .. }),
                "{activity_type}: {err}"
            );
        }
    }
}

/// CONTRACT: the normalized unit is the calculator's canonical unit
#[test]
fn contract_normalized_unit_is_canonical() {
    let units = UnitConverterRegistry::new();
    let registry = registry();
    for activity_type in ActivityType::ALL {
        let calculator = registry.get(activity_type).unwrap();
        let unit = calculator.normalized_unit(activity_type);
        assert!(units.is_supported(unit), "{unit}");

        let input = calculator
            .validate(&RawInput::new(activity_type, 3.0, unit))
            .unwrap();
        assert_eq!(input.normalized_unit(), unit);
    }
}

/// CONTRACT: a factor for another activity type is refused
#[test]
fn contract_factor_must_match_activity() {
    let registry = registry();
    let calculator = registry.get(ActivityType::Diesel).unwrap();
    let input = calculator
        .validate(&RawInput::new(ActivityType::Diesel, 10.0, "L"))
        .unwrap();
    let wrong = unit_factor(ActivityType::Gasoline, "L");

    assert!(matches!(
        calculator.calculate(&input, &wrong),
        Err(CalcError::FactorMismatch { .. })
    ));
}

/// CONTRACT: location-based electricity is amount times factor
#[test]
fn contract_location_based_electricity() {
    let registry = registry();
    let calculator = registry.get(ActivityType::Electricity).unwrap();
    let factor = EmissionFactor::new("grid", ActivityType::Electricity, "CN", 2023, 0.5810, "kg CO2e/kWh");
    let raw = RawInput::new(ActivityType::Electricity, 1000.0, "kWh")
        .with_metadata(Metadata::new().with("method", "location_based"));

    let result = calculator.calculate(&calculator.validate(&raw).unwrap(), &factor).unwrap();
    assert_close!(result.t_co2e, 0.581);
}

/// CONTRACT: renewable PPA supply is zero-emission under market-based accounting
#[test]
fn contract_renewable_ppa_is_zero() {
    let registry = registry();
    let calculator = registry.get(ActivityType::Electricity).unwrap();
    let factor = EmissionFactor::new("grid", ActivityType::Electricity, "CN", 2023, 0.581, "kg CO2e/kWh");

    for amount in [1.0, 1000.0, 2.5e7] {
        let raw = RawInput::new(ActivityType::Electricity, amount, "kWh").with_metadata(
            Metadata::new()
                .with("method", "market_based")
                .with("contractType", "renewable_ppa"),
        );
        let result = calculator.calculate(&calculator.validate(&raw).unwrap(), &factor).unwrap();
        assert_eq!(result.t_co2e, 0.0);
    }
}

/// CONTRACT: economy domestic-short flights apply the factor unadjusted
#[test]
fn contract_economy_short_flight() {
    let registry = registry();
    let calculator = registry.get(ActivityType::FlightDomesticShort).unwrap();
    let factor = EmissionFactor::new(
        "flight",
        ActivityType::FlightDomesticShort,
        "GLOBAL",
        2023,
        0.1579,
        "kg CO2e/passenger-km",
    );
    let raw = RawInput::new(ActivityType::FlightDomesticShort, 1000.0, "passenger-km")
        .with_metadata(Metadata::new().with("cabinClass", "economy"));

    let result = calculator.calculate(&calculator.validate(&raw).unwrap(), &factor).unwrap();
    assert_close!(result.t_co2e, 0.1579);
}

/// CONTRACT: recycling is an avoided-emissions credit
#[test]
fn contract_recycling_is_a_credit() {
    let registry = registry();
    let calculator = registry.get(ActivityType::WasteRecycling).unwrap();
    let factor = unit_factor(ActivityType::WasteRecycling, "kg");
    let raw = RawInput::new(ActivityType::WasteRecycling, 500.0, "kg")
        .with_metadata(Metadata::new().with("wasteType", "plastic"));

    let result = calculator.calculate(&calculator.validate(&raw).unwrap(), &factor).unwrap();
    assert!(result.t_co2e < 0.0, "{}", result.t_co2e);
}
