//! Emission scope value object - GHG Protocol reporting boundary
//!
//! - `Scope1`: direct emissions from owned combustion
//! - `Scope2`: indirect emissions from purchased energy
//! - `Scope3`: all other indirect emissions

use serde::{Deserialize, Serialize};

/// GHG Protocol scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EmissionScope {
    #[serde(rename = "scope_1")]
    Scope1,
    #[serde(rename = "scope_2")]
    Scope2,
    #[serde(rename = "scope_3")]
    Scope3,
}

impl EmissionScope {
    pub const ALL: [EmissionScope; 3] = [
        EmissionScope::Scope1,
        EmissionScope::Scope2,
        EmissionScope::Scope3,
    ];

    /// Scope number (1, 2 or 3)
    pub fn number(&self) -> u8 {
        match self {
            EmissionScope::Scope1 => 1,
            EmissionScope::Scope2 => 2,
            EmissionScope::Scope3 => 3,
        }
    }

    /// Serialized key (`scope_1`, ...) used in summaries and records
    pub fn as_key(&self) -> &'static str {
        match self {
            EmissionScope::Scope1 => "scope_1",
            EmissionScope::Scope2 => "scope_2",
            EmissionScope::Scope3 => "scope_3",
        }
    }

    /// Label used in capability listings
    pub fn label(&self) -> &'static str {
        match self {
            EmissionScope::Scope1 => "Scope 1 - Direct emissions",
            EmissionScope::Scope2 => "Scope 2 - Purchased energy",
            EmissionScope::Scope3 => "Scope 3 - Other indirect emissions",
        }
    }
}

impl std::fmt::Display for EmissionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scope {}", self.number())
    }
}
