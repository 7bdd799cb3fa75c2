//! Repository Implementations
//!
//! In-memory implementations of the domain repository ports, for embedding
//! and tests. Both can be seeded from JSON in the persistence layer's
//! camelCase shape.

mod activity;
mod factor;

pub use activity::InMemoryActivityRepository;
pub use factor::InMemoryFactorRepository;
