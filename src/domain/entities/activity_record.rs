//! Activity record entity
//!
//! A stored piece of activity data owned by an organization. Records keep
//! their activity type as a string because they come from storage; parsing
//! happens when the record is turned into a calculation input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::RawInput;
use crate::domain::value_objects::{ActivityType, DataQuality, Metadata};
use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: String,
    pub organization_id: String,
    pub activity_type: String,
    pub amount: f64,
    pub unit: String,
    #[serde(default)]
    pub metadata: Metadata,
    pub scope: String,
    pub category: String,
    #[serde(default)]
    pub data_quality: Option<DataQuality>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub facility_id: Option<String>,
    #[serde(default)]
    pub period_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub period_end: Option<DateTime<Utc>>,
}

impl ActivityRecord {
    /// New record; scope is derived from the activity type when it is known
    pub fn new(
        id: impl Into<String>,
        organization_id: impl Into<String>,
        activity_type: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
    ) -> Self {
        let activity_type = activity_type.into();
        let scope = activity_type
            .parse::<ActivityType>()
            .map(|t| t.scope().as_key().to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        Self {
            id: id.into(),
            organization_id: organization_id.into(),
            activity_type,
            amount,
            unit: unit.into(),
            metadata: Metadata::new(),
            scope,
            category: "uncategorized".to_string(),
            data_quality: None,
            project_id: None,
            facility_id: None,
            period_start: None,
            period_end: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_data_quality(mut self, data_quality: DataQuality) -> Self {
        self.data_quality = Some(data_quality);
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

    /// Calculation input for this record.
    ///
    /// A recorded data quality is passed on as `dataQuality` metadata.
    pub fn to_raw_input(&self) -> Result<RawInput, ValidationError> {
        let metadata = match self.data_quality {
            Some(quality) => self.metadata.clone().with("dataQuality", quality.as_str()),
            None => self.metadata.clone(),
        };
        Ok(RawInput::parse(&self.activity_type, self.amount, self.unit.as_str())?
            .with_metadata(metadata))
    }
}
