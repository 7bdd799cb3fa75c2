//! ActivityRepository port - abstraction for loading activity records

use crate::domain::entities::ActivityRecord;
use crate::domain::value_objects::BatchFilters;
use anyhow::Result;

/// Read access to an organization's activity records
pub trait ActivityRepository {
    /// Records of `organization_id` matching `filters`, in storage order
    fn find_records(
        &self,
        organization_id: &str,
        filters: &BatchFilters,
    ) -> Result<Vec<ActivityRecord>>;

    /// One record, or `None` when it does not exist for this organization
    fn find_record(&self, organization_id: &str, id: &str) -> Result<Option<ActivityRecord>>;
}
