//! Emission factor entity
//!
//! A catalog entry: kg CO2e (or kg of a single gas) per unit of activity,
//! together with the fields the resolver ranks candidates by.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ActivityType, Fingerprint, Metadata};

/// Publishers whose factors count as standard when no source type is given
const STANDARD_SOURCES: &[&str] = &["IPCC", "DEFRA", "EPA", "GHG_PROTOCOL", "IEA"];

/// Whether a factor comes from a published standard or is organization-specific.
///
/// Ordering puts `Standard` first so it wins ranking ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Standard,
    Custom,
}

impl SourceType {
    pub fn from_source(source: &str) -> Self {
        if STANDARD_SOURCES
            .iter()
            .any(|s| s.eq_ignore_ascii_case(source))
        {
            SourceType::Standard
        } else {
            SourceType::Custom
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredEmissionFactor")]
pub struct EmissionFactor {
    pub id: String,
    pub activity_type: ActivityType,
    pub region: String,
    pub year: i32,
    pub factor_value: f64,
    pub factor_unit: String,
    /// Gas the factor measures: `CO2`, `CH4`, `N2O` or `CO2e`
    pub gas: String,
    pub gwp: f64,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub methodology: Option<String>,
    #[serde(default)]
    pub assumptions: Metadata,
    pub source: String,
    pub source_type: SourceType,
    /// `None` for system-wide factors
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub validity_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub validity_end: Option<DateTime<Utc>>,
}

/// Catalog form of a factor; `sourceType` may be omitted
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEmissionFactor {
    id: String,
    activity_type: ActivityType,
    region: String,
    year: i32,
    factor_value: f64,
    factor_unit: String,
    gas: String,
    gwp: f64,
    #[serde(default)]
    reference: Option<String>,
    #[serde(default)]
    methodology: Option<String>,
    #[serde(default)]
    assumptions: Metadata,
    source: String,
    #[serde(default)]
    source_type: Option<SourceType>,
    #[serde(default)]
    organization_id: Option<String>,
    #[serde(default)]
    priority: i32,
    #[serde(default)]
    is_default: bool,
    #[serde(default = "default_active")]
    is_active: bool,
    #[serde(default)]
    validity_start: Option<DateTime<Utc>>,
    #[serde(default)]
    validity_end: Option<DateTime<Utc>>,
}

impl From<StoredEmissionFactor> for EmissionFactor {
    fn from(stored: StoredEmissionFactor) -> Self {
        let source_type = stored
            .source_type
            .unwrap_or_else(|| SourceType::from_source(&stored.source));
        Self {
            id: stored.id,
            activity_type: stored.activity_type,
            region: stored.region,
            year: stored.year,
            factor_value: stored.factor_value,
            factor_unit: stored.factor_unit,
            gas: stored.gas,
            gwp: stored.gwp,
            reference: stored.reference,
            methodology: stored.methodology,
            assumptions: stored.assumptions,
            source: stored.source,
            source_type,
            organization_id: stored.organization_id,
            priority: stored.priority,
            is_default: stored.is_default,
            is_active: stored.is_active,
            validity_start: stored.validity_start,
            validity_end: stored.validity_end,
        }
    }
}

fn default_active() -> bool {
    true
}

impl EmissionFactor {
    pub fn new(
        id: impl Into<String>,
        activity_type: ActivityType,
        region: impl Into<String>,
        year: i32,
        factor_value: f64,
        factor_unit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            activity_type,
            region: region.into(),
            year,
            factor_value,
            factor_unit: factor_unit.into(),
            gas: "CO2".to_string(),
            gwp: 1.0,
            reference: None,
            methodology: None,
            assumptions: Metadata::new(),
            source: "UNSPECIFIED".to_string(),
            source_type: SourceType::Custom,
            organization_id: None,
            priority: 0,
            is_default: false,
            is_active: true,
            validity_start: None,
            validity_end: None,
        }
    }

    /// Set the publisher; the source type is derived from it
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self.source_type = SourceType::from_source(&self.source);
        self
    }

    pub fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = source_type;
        self
    }

    pub fn with_gas(mut self, gas: impl Into<String>, gwp: f64) -> Self {
        self.gas = gas.into();
        self.gwp = gwp;
        self
    }

    pub fn for_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn with_validity(
        mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Self {
        self.validity_start = start;
        self.validity_end = end;
        self
    }

    pub fn with_methodology(mut self, methodology: impl Into<String>) -> Self {
        self.methodology = Some(methodology.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_assumptions(mut self, assumptions: Metadata) -> Self {
        self.assumptions = assumptions;
        self
    }

    pub fn is_global(&self) -> bool {
        self.organization_id.is_none()
    }

    pub fn is_owned_by(&self, organization_id: &str) -> bool {
        self.organization_id.as_deref() == Some(organization_id)
    }

    /// Global factors are visible to everyone, owned factors only to their owner
    pub fn is_accessible_to(&self, organization_id: &str) -> bool {
        self.is_global() || self.is_owned_by(organization_id)
    }

    /// Whether `as_of` falls inside the (inclusive) validity window
    pub fn is_valid_at(&self, as_of: DateTime<Utc>) -> bool {
        self.validity_start.map_or(true, |start| start <= as_of)
            && self.validity_end.map_or(true, |end| as_of <= end)
    }

    pub fn is_gas(&self, gas: &str) -> bool {
        self.gas.eq_ignore_ascii_case(gas)
    }

    /// SHA-256 of the factor's serialized form
    pub fn fingerprint(&self) -> Fingerprint {
        match serde_json::to_vec(self) {
            Ok(bytes) => Fingerprint::of_bytes(&bytes),
            Err(_) => Fingerprint::of_bytes(format!("{:?}", self).as_bytes()),
        }
    }
}
