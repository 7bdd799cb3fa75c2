//! Common test utilities for ghgcalc contract and scenario tests.
//!
//! This module provides:
//! - Fixtures: a factor catalog and activity records for two organizations
//! - `assert_close!` for floating-point tonnages

pub mod assertions;
pub mod fixtures;

pub use fixtures::*;
