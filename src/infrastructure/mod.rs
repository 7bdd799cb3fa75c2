//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `repositories/` - In-memory factor catalog and activity store

pub mod repositories;

pub use repositories::{InMemoryActivityRepository, InMemoryFactorRepository};
