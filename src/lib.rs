//! Migration Value - deterministic value assessment for data-platform migrations
//!
//! This library provides:
//! - Efficiency benchmarks with file loading and safe fallbacks
//! - Savings levers (compute, storage, productivity)
//! - Financial metrics (TCO, ROI, NPV, payback, IRR)
//! - The as-is vs to-be assessment with categorized value buckets
//! - Sensitivity runs across migration fractions
//! - A keyword-based discovery brief and a Markdown executive readout

pub mod benchmarks;
pub mod discovery;
pub mod error;
pub mod profile;
pub mod readout;
pub mod scenario;
pub mod valuation;

// Re-export commonly used types
pub use benchmarks::{Benchmarks, FilingMetrics};
pub use error::{AssessmentError, BenchmarkError};
pub use profile::{AssessmentParams, CostProfile};
pub use scenario::ScenarioRunner;
pub use valuation::{run_assessment, AssessmentResult, ValuationEngine};
