//! In-memory emission factor catalog

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::EmissionFactor;
use crate::domain::ports::FactorRepository;
use crate::domain::value_objects::ActivityType;

#[derive(Debug, Clone, Default)]
pub struct InMemoryFactorRepository {
    factors: Vec<EmissionFactor>,
}

impl InMemoryFactorRepository {
    pub fn new(factors: Vec<EmissionFactor>) -> Self {
        Self { factors }
    }

    /// Parse a JSON array of factors
    pub fn from_json_str(json: &str) -> Result<Self> {
        let factors: Vec<EmissionFactor> =
            serde_json::from_str(json).context("invalid emission factor catalog")?;
        Ok(Self::new(factors))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn insert(&mut self, factor: EmissionFactor) {
        self.factors.push(factor);
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl FactorRepository for InMemoryFactorRepository {
    fn find_candidate_factors(
        &self,
        activity_type: ActivityType,
        organization_id: &str,
    ) -> Result<Vec<EmissionFactor>> {
        Ok(self
            .factors
            .iter()
            .filter(|f| f.activity_type == activity_type && f.is_accessible_to(organization_id))
            .cloned()
            .collect())
    }

    fn find_factor_by_id(&self, id: &str) -> Result<Option<EmissionFactor>> {
        Ok(self.factors.iter().find(|f| f.id == id).cloned())
    }
}
