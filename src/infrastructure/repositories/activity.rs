//! In-memory activity record store

use anyhow::{Context, Result};

use crate::domain::entities::ActivityRecord;
use crate::domain::ports::ActivityRepository;
use crate::domain::value_objects::BatchFilters;

#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityRepository {
    records: Vec<ActivityRecord>,
}

impl InMemoryActivityRepository {
    pub fn new(records: Vec<ActivityRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of activity records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<ActivityRecord> =
            serde_json::from_str(json).context("invalid activity records")?;
        Ok(Self::new(records))
    }

    pub fn insert(&mut self, record: ActivityRecord) {
        self.records.push(record);
    }
}

impl ActivityRepository for InMemoryActivityRepository {
    fn find_records(
        &self,
        organization_id: &str,
        filters: &BatchFilters,
    ) -> Result<Vec<ActivityRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.organization_id == organization_id && filters.matches(r))
            .cloned()
            .collect())
    }

    fn find_record(&self, organization_id: &str, id: &str) -> Result<Option<ActivityRecord>> {
        Ok(self
            .records
            .iter()
            .find(|r| r.organization_id == organization_id && r.id == id)
            .cloned())
    }
}
