//! Emission factor resolver
//!
//! Picks the factor a calculation should use. An explicitly requested factor
//! is checked for visibility and validity; otherwise the candidates are
//! filtered and ranked:
//!
//! 1. owned by the organization over system-global
//! 2. newer year
//! 3. higher priority
//! 4. default over non-default
//! 5. standard source over custom
//!
//! A complete tie goes to the earlier candidate.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use crate::domain::entities::EmissionFactor;
use crate::domain::value_objects::ActivityType;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FactorNotFound {
    #[error("emission factor '{id}' not found")]
    Missing { id: String },

    #[error("emission factor '{id}' is inactive")]
    Inactive { id: String },

    #[error("emission factor '{id}' is outside its validity period")]
    Expired { id: String },

    #[error("no emission factor available for activity type '{activity_type}'")]
    NoCandidates { activity_type: ActivityType },
}

#[derive(Debug, Clone)]
pub struct EmissionFactorResolver {
    activity_type: ActivityType,
    organization_id: String,
    factor_id: Option<String>,
    as_of: Option<DateTime<Utc>>,
}

impl EmissionFactorResolver {
    pub fn new(activity_type: ActivityType, organization_id: impl Into<String>) -> Self {
        Self {
            activity_type,
            organization_id: organization_id.into(),
            factor_id: None,
            as_of: None,
        }
    }

    /// Request a specific factor instead of ranking candidates
    pub fn with_factor_id(mut self, factor_id: Option<String>) -> Self {
        self.factor_id = factor_id;
        self
    }

    /// Evaluate validity windows at `as_of` instead of now
    pub fn as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn factor_id(&self) -> Option<&str> {
        self.factor_id.as_deref()
    }

    fn moment(&self) -> DateTime<Utc> {
        self.as_of.unwrap_or_else(Utc::now)
    }

    /// Resolve against `candidates`.
    ///
    /// With a factor id the candidate carrying that id is checked; otherwise
    /// the best ranked candidate is returned.
    pub fn resolve<'a>(
        &self,
        candidates: &'a [EmissionFactor],
    ) -> Result<&'a EmissionFactor, FactorNotFound> {
        match &self.factor_id {
            Some(id) => self.select_explicit(candidates.iter().find(|f| &f.id == id)),
            None => self
                .ranked(candidates)
                .into_iter()
                .next()
                .ok_or(FactorNotFound::NoCandidates {
                    activity_type: self.activity_type,
                }),
        }
    }

    /// Check an explicitly requested factor fetched by id.
    ///
    /// A factor owned by another organization is reported as missing.
    pub fn select_explicit<'a>(
        &self,
        factor: Option<&'a EmissionFactor>,
    ) -> Result<&'a EmissionFactor, FactorNotFound> {
        let id = self.factor_id.clone().unwrap_or_default();
        let factor = match factor {
            Some(f) if f.is_accessible_to(&self.organization_id) => f,
            Some(f) => return Err(FactorNotFound::Missing { id: f.id.clone() }),
            None => return Err(FactorNotFound::Missing { id }),
        };

        if !factor.is_active {
            return Err(FactorNotFound::Inactive {
                id: factor.id.clone(),
            });
        }
        if !factor.is_valid_at(self.moment()) {
            return Err(FactorNotFound::Expired {
                id: factor.id.clone(),
            });
        }
        Ok(factor)
    }

    /// Eligible candidates, best first
    pub fn ranked<'a>(&self, candidates: &'a [EmissionFactor]) -> Vec<&'a EmissionFactor> {
        let now = self.moment();
        let mut eligible: Vec<&EmissionFactor> = candidates
            .iter()
            .filter(|f| {
                f.activity_type == self.activity_type
                    && f.is_active
                    && f.is_accessible_to(&self.organization_id)
                    && f.is_valid_at(now)
            })
            .collect();

        // Stable sort keeps candidate order on complete ties
        eligible.sort_by_key(|f| {
            (
                Reverse(f.is_owned_by(&self.organization_id)),
                Reverse(f.year),
                Reverse(f.priority),
                Reverse(f.is_default),
                f.source_type,
            )
        });
        eligible
    }
}
