//! Scenario runner for sensitivity analysis
//!
//! Builds the engine once with a fixed set of benchmarks, then re-runs the
//! assessment for many parameter sets without reloading anything.

use crate::benchmarks::Benchmarks;
use crate::error::AssessmentError;
use crate::profile::{AssessmentParams, CostProfile};
use crate::valuation::{AssessmentResult, ValuationEngine};

/// Pre-built scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_default_file();
///
/// for fraction in [0.25, 0.50, 0.75] {
///     let params = AssessmentParams::default().with_migration_fraction(fraction);
///     let result = runner.run(&profile, &params)?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ValuationEngine,
}

impl ScenarioRunner {
    /// Create runner with the default benchmarks
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner by loading the default benchmark file (with fallback)
    pub fn from_default_file() -> Self {
        Self::with_benchmarks(Benchmarks::load_default())
    }

    /// Create runner with pre-built benchmarks
    pub fn with_benchmarks(benchmarks: Benchmarks) -> Self {
        Self {
            engine: ValuationEngine::new(benchmarks),
        }
    }

    /// Run a single assessment
    pub fn run(&self, profile: &CostProfile, params: &AssessmentParams) -> Result<AssessmentResult, AssessmentError> {
        self.engine.run_assessment(profile, params)
    }

    /// Run several parameter sets against one profile; stops at the first invalid set
    pub fn run_scenarios(
        &self,
        profile: &CostProfile,
        params: &[AssessmentParams],
    ) -> Result<Vec<AssessmentResult>, AssessmentError> {
        params.iter().map(|p| self.engine.run_assessment(profile, p)).collect()
    }

    /// Vary only the migration fraction around `base`
    pub fn sweep_migration(
        &self,
        profile: &CostProfile,
        base: &AssessmentParams,
        fractions: &[f64],
    ) -> Result<Vec<(f64, AssessmentResult)>, AssessmentError> {
        fractions
            .iter()
            .map(|&f| {
                let params = base.with_migration_fraction(f);
                self.engine.run_assessment(profile, &params).map(|r| (f, r))
            })
            .collect()
    }

    /// Benchmarks the runner was built with
    pub fn benchmarks(&self) -> &Benchmarks {
        self.engine.benchmarks()
    }
}

/// Fractions 10%, 20%, ... 100%
pub fn default_sweep_fractions() -> Vec<f64> {
    (1..=10).map(|i| i as f64 / 10.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CostProfile {
        CostProfile {
            infrastructure_cost: 25_000_000.0,
            compute_cost: 45_000_000.0,
            storage_cost: 15_000_000.0,
            licensing_cost: 12_000_000.0,
            headcount: 300,
            average_salary: 180_000.0,
        }
    }

    #[test]
    fn test_sweep_monotone_savings() {
        let runner = ScenarioRunner::new();
        let results = runner
            .sweep_migration(&profile(), &AssessmentParams::default(), &default_sweep_fractions())
            .unwrap();
        assert_eq!(results.len(), 10);
        for pair in results.windows(2) {
            assert!(pair[1].1.total_annual_savings >= pair[0].1.total_annual_savings);
            assert!(pair[1].1.npv >= pair[0].1.npv);
        }
        assert_eq!(results[9].0, 1.0);
    }

    #[test]
    fn test_run_scenarios_stops_on_invalid() {
        let runner = ScenarioRunner::new();
        let params = [
            AssessmentParams::default(),
            AssessmentParams::default().with_years(0),
        ];
        assert!(runner.run_scenarios(&profile(), &params).is_err());
    }

    #[test]
    fn test_runner_keeps_benchmarks() {
        let runner = ScenarioRunner::with_benchmarks(Benchmarks::new(0.4, 0.3));
        assert_eq!(runner.benchmarks().compute_efficiency_gain, 0.4);
    }
}
