//! JSON-based benchmark loader
//!
//! Reads the extracted benchmark file written by the filing pipeline
//! (data/extracted_benchmarks.json).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BenchmarkError;

/// Default path to the extracted benchmark file
pub const DEFAULT_BENCHMARKS_PATH: &str = "data/extracted_benchmarks.json";

/// JSON key of the compute efficiency benchmark
pub const COMPUTE_KEY: &str = "implied_compute_efficiency_gain";

/// JSON key of the storage compression benchmark
pub const STORAGE_KEY: &str = "implied_storage_compression_improvement";

/// Fallback compute efficiency gain (30%)
pub const DEFAULT_COMPUTE_EFFICIENCY_GAIN: f64 = 0.30;

/// Fallback storage compression improvement (30%)
pub const DEFAULT_STORAGE_COMPRESSION_IMPROVEMENT: f64 = 0.30;

fn default_compute() -> f64 {
    DEFAULT_COMPUTE_EFFICIENCY_GAIN
}

fn default_storage() -> f64 {
    DEFAULT_STORAGE_COMPRESSION_IMPROVEMENT
}

/// Raw file contents. Keys missing from the file fall back one by one;
/// extra keys (operating_margin, revenue_growth) are kept for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkFile {
    #[serde(rename = "implied_compute_efficiency_gain", default = "default_compute")]
    pub compute_efficiency_gain: f64,
    #[serde(rename = "implied_storage_compression_improvement", default = "default_storage")]
    pub storage_compression_improvement: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_margin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_growth: Option<f64>,
}

impl BenchmarkFile {
    /// Reject values no fraction can take
    pub fn check_ranges(&self) -> Result<(), BenchmarkError> {
        check_fraction(COMPUTE_KEY, self.compute_efficiency_gain)?;
        check_fraction(STORAGE_KEY, self.storage_compression_improvement)?;
        Ok(())
    }
}

fn check_fraction(key: &'static str, value: f64) -> Result<(), BenchmarkError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(BenchmarkError::OutOfRange { key, value })
    }
}

/// Load and range-check the benchmark file at `path`
pub fn load_benchmark_file(path: &Path) -> Result<BenchmarkFile, BenchmarkError> {
    let file = File::open(path)?;
    let parsed: BenchmarkFile = serde_json::from_reader(BufReader::new(file))?;
    parsed.check_ranges()?;
    Ok(parsed)
}

/// Parse benchmark JSON from any reader (string buffer, embedded asset)
pub fn load_benchmark_reader<R: std::io::Read>(reader: R) -> Result<BenchmarkFile, BenchmarkError> {
    let parsed: BenchmarkFile = serde_json::from_reader(reader)?;
    parsed.check_ranges()?;
    Ok(parsed)
}
