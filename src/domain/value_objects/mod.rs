//! Domain Value Objects
//!
//! Immutable value types shared by entities, services and calculators.

mod activity_type;
mod config_warning;
mod data_quality;
mod duplicate_policy;
mod filters;
mod fingerprint;
mod metadata;
mod scope;

pub use activity_type::ActivityType;
pub use config_warning::ConfigWarning;
pub use data_quality::DataQuality;
pub use duplicate_policy::DuplicatePolicy;
pub use filters::BatchFilters;
pub use fingerprint::Fingerprint;
pub use metadata::Metadata;
pub use scope::EmissionScope;
