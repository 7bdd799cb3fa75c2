//! Domain Layer
//!
//! The calculation engine itself, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - Emission factors, activity records, calculation inputs and results
//! - `value_objects/` - Activity types, scopes, metadata, filters
//! - `services/` - Unit conversion, calculators, registry, factor resolver
//! - `policies/` - Data quality rules
//! - `ports/` - Storage interfaces implemented outside the domain

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
