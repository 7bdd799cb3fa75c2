//! FactorRepository port - abstraction over the emission factor catalog

use crate::domain::entities::EmissionFactor;
use crate::domain::value_objects::ActivityType;
use anyhow::Result;

/// Read access to emission factors
///
/// Candidate lists may be broader than needed; the resolver applies the
/// visibility, activity and validity rules itself.
pub trait FactorRepository {
    /// Factors for `activity_type` that are global or owned by `organization_id`
    fn find_candidate_factors(
        &self,
        activity_type: ActivityType,
        organization_id: &str,
    ) -> Result<Vec<EmissionFactor>>;

    /// A single factor by id, regardless of owner
    fn find_factor_by_id(&self, id: &str) -> Result<Option<EmissionFactor>>;
}
