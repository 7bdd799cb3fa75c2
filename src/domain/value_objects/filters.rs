//! Batch selection filters for activity records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::ActivityRecord;

/// Which activity records a batch calculation covers.
///
/// Every set field must match. `record_ids` restricts to the listed ids; the
/// period filter keeps records whose reporting period overlaps
/// `[period_start, period_end]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchFilters {
    pub record_ids: Vec<String>,
    pub scope: Option<String>,
    pub category: Option<String>,
    pub activity_type: Option<String>,
    pub project_id: Option<String>,
    pub facility_id: Option<String>,
    pub period_start: Option<DateTime<Utc>>,
    pub period_end: Option<DateTime<Utc>>,
}

impl BatchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_activity_type(mut self, activity_type: impl Into<String>) -> Self {
        self.activity_type = Some(activity_type.into());
        self
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_facility(mut self, facility_id: impl Into<String>) -> Self {
        self.facility_id = Some(facility_id.into());
        self
    }

    pub fn with_period(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.period_start = Some(start);
        self.period_end = Some(end);
        self
    }

    pub fn matches(&self, record: &ActivityRecord) -> bool {
        if !self.record_ids.is_empty() && !self.record_ids.iter().any(|id| *id == record.id) {
            return false;
        }
        if !field_matches(&self.scope, Some(&record.scope))
            || !field_matches(&self.category, Some(&record.category))
            || !field_matches(&self.activity_type, Some(&record.activity_type))
            || !field_matches(&self.project_id, record.project_id.as_ref())
            || !field_matches(&self.facility_id, record.facility_id.as_ref())
        {
            return false;
        }

        // Overlap: record ends after the window starts and starts before it ends
        if let (Some(start), Some(record_end)) = (self.period_start, record.period_end) {
            if record_end < start {
                return false;
            }
        }
        if let (Some(end), Some(record_start)) = (self.period_end, record.period_start) {
            if record_start > end {
                return false;
            }
        }
        true
    }
}

fn field_matches(wanted: &Option<String>, actual: Option<&String>) -> bool {
    match wanted {
        None => true,
        Some(w) => actual == Some(w),
    }
}
