//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//!
//! ## Use Cases
//!
//! - `CalculationService` - Single, batch, recalculation and multimodal flows

pub mod calculation;

pub use calculation::{
    BatchCalculationResult, BatchRequest, BatchSummary, CalculationService, RecordCalculation,
};
