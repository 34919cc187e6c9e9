//! Efficiency benchmarks that tune the valuation levers
//!
//! Benchmarks are built once (from file, from filing metrics, or from the
//! defaults) and handed to the engine by value. Nothing here is global.

pub mod loader;

pub use loader::{
    BenchmarkFile, DEFAULT_BENCHMARKS_PATH, DEFAULT_COMPUTE_EFFICIENCY_GAIN,
    DEFAULT_STORAGE_COMPRESSION_IMPROVEMENT,
};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::BenchmarkError;

/// Compute gain the filing extractor starts from before tuning
pub const EXTRACTOR_BASELINE_COMPUTE_GAIN: f64 = 0.25;

/// Compute gain assumed for highly profitable filers
pub const HIGH_MARGIN_COMPUTE_GAIN: f64 = 0.40;

/// Operating margin above which the high-margin compute gain applies
pub const HIGH_MARGIN_THRESHOLD: f64 = 0.35;

/// The two fractional benchmarks used by the engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Benchmarks {
    /// Feeds the compute savings lever
    #[serde(rename = "implied_compute_efficiency_gain")]
    pub compute_efficiency_gain: f64,

    /// Carried for reporting only. Storage savings use the fixed
    /// `STORAGE_COMPRESSION_RATE`, not this value.
    #[serde(rename = "implied_storage_compression_improvement")]
    pub storage_compression_improvement: f64,
}

impl Default for Benchmarks {
    fn default() -> Self {
        Self {
            compute_efficiency_gain: DEFAULT_COMPUTE_EFFICIENCY_GAIN,
            storage_compression_improvement: DEFAULT_STORAGE_COMPRESSION_IMPROVEMENT,
        }
    }
}

/// Headline figures scraped from an annual filing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FilingMetrics {
    pub operating_margin: f64,
    pub revenue_growth: f64,
}

impl Benchmarks {
    pub fn new(compute_efficiency_gain: f64, storage_compression_improvement: f64) -> Self {
        Self {
            compute_efficiency_gain,
            storage_compression_improvement,
        }
    }

    /// Load benchmarks from the default path, falling back to defaults
    pub fn load_default() -> Self {
        Self::load_or_default(Path::new(DEFAULT_BENCHMARKS_PATH))
    }

    /// Load benchmarks from `path`. Any failure (missing file, bad JSON,
    /// out-of-range value) yields `Benchmarks::default()`.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_strict(path) {
            Ok(benchmarks) => {
                debug!("loaded benchmarks from {}: {:?}", path.display(), benchmarks);
                benchmarks
            }
            Err(e) => {
                warn!("{}; using default benchmarks", e);
                Self::default()
            }
        }
    }

    /// Fallible read, for callers that want to surface the failure
    pub fn load_strict(path: &Path) -> Result<Self, BenchmarkError> {
        let file = loader::load_benchmark_file(path)?;
        Ok(Self::from(&file))
    }

    /// Tune benchmarks from filing metrics: high operating margins imply
    /// room for heavier compute investment.
    pub fn from_filing_metrics(metrics: &FilingMetrics) -> Self {
        let compute_efficiency_gain = if metrics.operating_margin > HIGH_MARGIN_THRESHOLD {
            HIGH_MARGIN_COMPUTE_GAIN
        } else {
            EXTRACTOR_BASELINE_COMPUTE_GAIN
        };
        Self {
            compute_efficiency_gain,
            storage_compression_improvement: DEFAULT_STORAGE_COMPRESSION_IMPROVEMENT,
        }
    }

    /// File representation including the filing metrics it was derived from
    pub fn to_file(&self, metrics: Option<&FilingMetrics>) -> BenchmarkFile {
        BenchmarkFile {
            compute_efficiency_gain: self.compute_efficiency_gain,
            storage_compression_improvement: self.storage_compression_improvement,
            operating_margin: metrics.map(|m| m.operating_margin),
            revenue_growth: metrics.map(|m| m.revenue_growth),
        }
    }
}

impl From<&BenchmarkFile> for Benchmarks {
    fn from(file: &BenchmarkFile) -> Self {
        Self {
            compute_efficiency_gain: file.compute_efficiency_gain,
            storage_compression_improvement: file.storage_compression_improvement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("migration_value_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_falls_back() {
        let b = Benchmarks::load_or_default(Path::new("no/such/benchmarks.json"));
        assert_eq!(b, Benchmarks::default());
        assert_eq!(b.compute_efficiency_gain, 0.30);
        assert_eq!(b.storage_compression_improvement, 0.30);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let path = temp_path("malformed");
        fs::write(&path, "{ implied_compute_efficiency_gain: ").unwrap();
        let b = Benchmarks::load_or_default(&path);
        fs::remove_file(&path).ok();
        assert_eq!(b, Benchmarks::default());
    }

    #[test]
    fn test_valid_file_loaded() {
        let path = temp_path("valid");
        fs::write(
            &path,
            r#"{"implied_compute_efficiency_gain": 0.4, "implied_storage_compression_improvement": 0.3, "operating_margin": 0.41}"#,
        )
        .unwrap();
        let b = Benchmarks::load_or_default(&path);
        fs::remove_file(&path).ok();
        assert_eq!(b.compute_efficiency_gain, 0.4);
    }

    #[test]
    fn test_strict_surfaces_error() {
        assert!(Benchmarks::load_strict(Path::new("no/such/benchmarks.json")).is_err());
    }

    #[test]
    fn test_filing_metrics_tuning() {
        let high = Benchmarks::from_filing_metrics(&FilingMetrics {
            operating_margin: 0.38,
            revenue_growth: 0.10,
        });
        assert_eq!(high.compute_efficiency_gain, 0.40);

        let low = Benchmarks::from_filing_metrics(&FilingMetrics {
            operating_margin: 0.35,
            revenue_growth: 0.10,
        });
        assert_eq!(low.compute_efficiency_gain, 0.25);
        assert_eq!(low.storage_compression_improvement, 0.30);
    }

    #[test]
    fn test_written_file_reads_back() {
        let b = Benchmarks::new(0.4, 0.3);
        let json = serde_json::to_string(&b.to_file(None)).unwrap();
        assert!(!json.contains("operating_margin"));

        let file = loader::load_benchmark_reader(json.as_bytes()).unwrap();
        assert_eq!(Benchmarks::from(&file), b);
        assert!(file.operating_margin.is_none());

        let metrics = FilingMetrics {
            operating_margin: 0.42,
            revenue_growth: 0.11,
        };
        let tuned = Benchmarks::from_filing_metrics(&metrics);
        let json = serde_json::to_string(&tuned.to_file(Some(&metrics))).unwrap();
        let file = loader::load_benchmark_reader(json.as_bytes()).unwrap();
        assert_eq!(Benchmarks::from(&file), tuned);
        assert_eq!(file.operating_margin, Some(0.42));
        assert_eq!(file.revenue_growth, Some(0.11));
    }
}
