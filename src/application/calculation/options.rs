//! Calculation Options
//!
//! Request types for batch operations.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::BatchFilters;

/// Which records of an organization a batch run covers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub organization_id: String,
    /// Empty filters select every record of the organization
    #[serde(default)]
    pub filters: BatchFilters,
}

impl BatchRequest {
    pub fn new(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            filters: BatchFilters::default(),
        }
    }

    pub fn with_record_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters = self.filters.with_record_ids(ids);
        self
    }

    pub fn with_filters(mut self, filters: BatchFilters) -> Self {
        self.filters = filters;
        self
    }
}
