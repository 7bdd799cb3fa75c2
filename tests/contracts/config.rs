//! Configuration contracts

use std::fs;
use std::sync::Arc;

use tempfile::tempdir;

use ghgcalc::{CalcError, CalculatorRegistry, DuplicatePolicy, EngineConfig, UnitConverterRegistry};

/// CONTRACT: a config file drives the registry it builds
#[test]
fn contract_config_file_shapes_registry() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ghgcalc.toml");
    fs::write(
        &path,
        r#"
[registry]
required_activity_types = ["electricity", "waste_landfill"]
duplicate_registration = "reject"
"#,
    )
    .unwrap();

    let config = EngineConfig::load(&path).unwrap();
    assert_eq!(config.registry.duplicate_registration, DuplicatePolicy::Reject);

    let registry =
        CalculatorRegistry::from_config(Arc::new(UnitConverterRegistry::new()), &config).unwrap();
    assert!(registry.validate_configuration().is_valid);
}

/// CONTRACT: unknown keys warn, they never fail the load
#[test]
fn contract_unknown_keys_are_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ghgcalc.toml");
    fs::write(&path, "[registry]\nduplicate_registraton = \"reject\"\n").unwrap();

    let (config, warnings) = EngineConfig::load_with_warnings(&path).unwrap();
    assert_eq!(config.registry.duplicate_registration, DuplicatePolicy::Warn);
    assert_eq!(warnings.len(), 1);
    insta::assert_snapshot!(
        warnings[0].to_string().replace(&path.display().to_string(), "ghgcalc.toml"),
        @"unknown config key 'duplicate_registraton' in ghgcalc.toml:2 (did you mean 'duplicate_registration'?)"
    );
}

/// CONTRACT: malformed files are configuration errors naming the file
#[test]
fn contract_malformed_file_is_invalid_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ghgcalc.toml");
    fs::write(&path, "[registry\n").unwrap();

    match EngineConfig::load(&path).unwrap_err() {
        CalcError::InvalidConfig { file, .. } => assert_eq!(file, path),
        other => panic!("unexpected error: {other}"),
    }
}
