//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CalcError, CalcResult};

use super::types::EngineConfig;
use super::ConfigWarning;

/// Environment variable naming a config file when no path is given
pub const CONFIG_PATH_ENV: &str = "GHGCALC_CONFIG";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CalcResult<(EngineConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: EngineConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CalcError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate(&config).map_err(|message| CalcError::InvalidConfig {
        file: path.to_path_buf(),
        message,
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from `path`, else the file named by `GHGCALC_CONFIG`, else defaults.
///
/// Environment overrides are applied last. Unknown keys are logged, not fatal.
pub fn load_or_default(path: Option<&Path>) -> CalcResult<EngineConfig> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

    let config = match path {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            for warning in &warnings {
                tracing::warn!("{}", warning);
            }
            tracing::debug!(path = %path.display(), "loaded engine configuration");
            config
        }
        None => EngineConfig::default(),
    };

    Ok(with_env_overrides(config))
}

/// Apply environment variable overrides (GHGCALC_* prefix)
pub fn with_env_overrides(mut config: EngineConfig) -> EngineConfig {
    // GHGCALC_DUPLICATE_REGISTRATION
    if let Ok(policy) = std::env::var("GHGCALC_DUPLICATE_REGISTRATION") {
        match policy.parse() {
            Ok(policy) => config.registry.duplicate_registration = policy,
            Err(err) => tracing::warn!("ignoring GHGCALC_DUPLICATE_REGISTRATION: {}", err),
        }
    }

    // GHGCALC_WORKDAYS_PER_MONTH
    if let Ok(workdays) = std::env::var("GHGCALC_WORKDAYS_PER_MONTH") {
        match workdays.trim().parse::<f64>() {
            Ok(days) if days.is_finite() && days > 0.0 => config.travel.workdays_per_month = days,
            _ => tracing::warn!(
                value = %workdays,
                "ignoring GHGCALC_WORKDAYS_PER_MONTH: expected a positive number"
            ),
        }
    }

    config
}

fn validate(config: &EngineConfig) -> Result<(), String> {
    let workdays = config.travel.workdays_per_month;
    if !workdays.is_finite() || workdays <= 0.0 {
        return Err(format!(
            "travel.workdays_per_month must be a positive number, got {}",
            workdays
        ));
    }
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "registry",
        "required_activity_types",
        "duplicate_registration",
        "travel",
        "workdays_per_month",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
