//! Domain Ports (Interfaces)
//!
//! Storage boundaries of the engine. Infrastructure provides the
//! implementations; asynchronous stores adapt behind these synchronous traits.

pub mod activity_repository;
pub mod factor_repository;

pub use activity_repository::ActivityRepository;
pub use factor_repository::FactorRepository;
