//! Domain Policies
//!
//! Business rules that govern behavior. Pure functions over domain types.

mod data_quality;

pub use data_quality::determine_data_quality;
