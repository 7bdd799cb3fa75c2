//! Calculation Module
//!
//! Orchestrates emission calculations against the storage ports.
//!
//! ## Structure
//!
//! - `options` - Request types (`BatchRequest`)
//! - `result` - Result types (`RecordCalculation`, `BatchSummary`, `BatchCalculationResult`)
//! - `use_case` - Core orchestration (`CalculationService`)
//!
//! ## Usage
//!
//! ```ignore
//! use ghgcalc::application::calculation::{BatchRequest, CalculationService};
//!
//! let service = CalculationService::from_config(&config, factor_repo, activity_repo)?;
//! let result = service.batch_calculate(&BatchRequest::new("org-1"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::BatchRequest;
pub use result::{BatchCalculationResult, BatchSummary, RecordCalculation};
pub use use_case::CalculationService;
