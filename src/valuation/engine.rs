//! Valuation engine: baseline vs proposed cost of ownership for a migration

use log::{debug, info};

use super::levers::{
    estimate_compute_savings, estimate_productivity_lift, estimate_storage_savings, LeverSavings,
};
use super::metrics::{
    annual_tco, calculate_irr, calculate_npv, calculate_payback_period, calculate_roi,
    compute_baseline_tco,
};
use super::result::{AssessmentResult, CashflowRow, InfrastructureSizing, ValueBuckets};
use crate::benchmarks::Benchmarks;
use crate::error::AssessmentError;
use crate::profile::{AssessmentParams, CostProfile};

/// Edition the sizing estimate is priced against
pub const SIZING_EDITION: &str = "AWS Enterprise";

/// List price of one compute credit, enterprise edition
pub const PRICE_PER_CREDIT_ENTERPRISE: f64 = 3.00;

/// List price of one TB of storage per month
pub const PRICE_PER_TB_STORAGE_MONTHLY: f64 = 23.00;

/// Main valuation engine. Holds the benchmarks it was built with; every
/// assessment is a pure function of those plus the call's inputs.
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    benchmarks: Benchmarks,
}

impl ValuationEngine {
    pub fn new(benchmarks: Benchmarks) -> Self {
        Self { benchmarks }
    }

    pub fn benchmarks(&self) -> &Benchmarks {
        &self.benchmarks
    }

    /// Run the full as-is vs to-be assessment
    pub fn run_assessment(
        &self,
        profile: &CostProfile,
        params: &AssessmentParams,
    ) -> Result<AssessmentResult, AssessmentError> {
        profile.validate()?;
        params.validate()?;
        self.validate_benchmarks()?;

        let years = params.analysis_years;
        let fraction = params.migration_fraction;

        // Baseline (as-is)
        let labor_cost = profile.labor_cost();
        let baseline_annual_tco = annual_tco(profile.infrastructure_cost, profile.licensing_cost, labor_cost);
        let baseline_total_tco =
            compute_baseline_tco(profile.infrastructure_cost, profile.licensing_cost, labor_cost, years);

        // Savings levers
        let savings = LeverSavings {
            compute: estimate_compute_savings(profile.compute_cost, fraction, self.benchmarks.compute_efficiency_gain),
            storage: estimate_storage_savings(profile.storage_cost, fraction),
            productivity: estimate_productivity_lift(profile.headcount, profile.average_salary, fraction),
        };
        let total_annual_savings = savings.total();
        debug!(
            "levers: compute={:.2} storage={:.2} productivity={:.2}",
            savings.compute, savings.storage, savings.productivity
        );

        // Proposed (to-be)
        let proposed_annual_tco = baseline_annual_tco - total_annual_savings;
        let proposed_total_tco = proposed_annual_tco * years as f64 + params.implementation_cost;

        // Year 0 outlay, then flat savings
        let mut cash_flows = Vec::with_capacity(years as usize + 1);
        cash_flows.push(-params.implementation_cost);
        cash_flows.extend(std::iter::repeat(total_annual_savings).take(years as usize));

        let total_benefits = total_annual_savings * years as f64;
        let npv = calculate_npv(&cash_flows, params.discount_rate);
        let roi_percentage = calculate_roi(total_benefits, proposed_total_tco);
        let payback_period_years = calculate_payback_period(params.implementation_cost, total_annual_savings);
        let function_to_cost_ratio = if proposed_total_tco > 0.0 {
            total_benefits / proposed_total_tco
        } else {
            0.0
        };

        let infrastructure_sizing = size_infrastructure(profile, fraction, &savings);
        let cashflow_schedule = CashflowRow::schedule(&cash_flows, params.discount_rate);
        let irr = calculate_irr(&cash_flows);

        info!(
            "assessment: fraction={:.2} years={} annual_savings={:.2} npv={:.2} roi={:.2}%",
            fraction, years, total_annual_savings, npv, roi_percentage
        );

        Ok(AssessmentResult {
            analysis_years: years,
            baseline_annual_tco,
            baseline_total_tco,
            proposed_annual_tco,
            proposed_total_tco,
            savings,
            total_annual_savings,
            cash_flows,
            cashflow_schedule,
            npv,
            irr,
            roi_percentage,
            payback_period_years,
            function_to_cost_ratio,
            infrastructure_sizing,
            value_buckets: ValueBuckets::from_savings(&savings),
        })
    }

    fn validate_benchmarks(&self) -> Result<(), AssessmentError> {
        let gain = self.benchmarks.compute_efficiency_gain;
        if !gain.is_finite() || !(0.0..=1.0).contains(&gain) {
            return Err(AssessmentError::invalid(
                "compute_efficiency_gain",
                format!("{} is outside [0, 1]", gain),
            ));
        }
        Ok(())
    }
}

/// Convenience wrapper for one-off runs with explicit benchmarks
pub fn run_assessment(
    profile: &CostProfile,
    benchmarks: &Benchmarks,
    params: &AssessmentParams,
) -> Result<AssessmentResult, AssessmentError> {
    ValuationEngine::new(*benchmarks).run_assessment(profile, params)
}

/// Credits and storage implied by the migrated spend after savings
fn size_infrastructure(profile: &CostProfile, fraction: f64, savings: &LeverSavings) -> InfrastructureSizing {
    let proposed_compute_annual_cost = profile.compute_cost * fraction - savings.compute;
    let proposed_storage_annual_cost = profile.storage_cost * fraction - savings.storage;

    InfrastructureSizing {
        edition: SIZING_EDITION.to_string(),
        price_per_credit: PRICE_PER_CREDIT_ENTERPRISE,
        price_per_storage_tb_month: PRICE_PER_TB_STORAGE_MONTHLY,
        estimated_annual_credits: proposed_compute_annual_cost / PRICE_PER_CREDIT_ENTERPRISE,
        estimated_storage_tb: (proposed_storage_annual_cost / 12.0) / PRICE_PER_TB_STORAGE_MONTHLY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::result::ExecutiveSummary;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn reference_profile() -> CostProfile {
        CostProfile {
            infrastructure_cost: 2_000_000.0,
            compute_cost: 1_500_000.0,
            storage_cost: 500_000.0,
            licensing_cost: 300_000.0,
            headcount: 12,
            average_salary: 140_000.0,
        }
    }

    fn reference_params() -> AssessmentParams {
        AssessmentParams::default().with_migration_fraction(0.50)
    }

    fn engine() -> ValuationEngine {
        ValuationEngine::new(Benchmarks::new(0.30, 0.30))
    }

    #[test]
    fn test_reference_assessment() {
        let result = engine().run_assessment(&reference_profile(), &reference_params()).unwrap();

        assert_relative_eq!(result.savings.compute, 225_000.0, epsilon = 1e-6);
        assert_relative_eq!(result.savings.storage, 75_000.0, epsilon = 1e-6);
        assert_relative_eq!(result.savings.productivity, 126_000.0, epsilon = 1e-6);
        assert_relative_eq!(result.total_annual_savings, 426_000.0, epsilon = 1e-6);

        assert_eq!(result.baseline_annual_tco, 3_980_000.0);
        assert_eq!(result.baseline_total_tco, 11_940_000.0);

        assert_relative_eq!(result.proposed_annual_tco, 3_554_000.0, epsilon = 1e-6);
        assert_relative_eq!(result.proposed_total_tco, 3_554_000.0 * 3.0 + 150_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_proposed_annual_excludes_implementation() {
        let result = engine().run_assessment(&reference_profile(), &reference_params()).unwrap();
        assert_eq!(
            result.proposed_annual_tco,
            result.baseline_annual_tco - result.total_annual_savings
        );
    }

    #[test]
    fn test_cash_flow_shape() {
        let result = engine().run_assessment(&reference_profile(), &reference_params()).unwrap();
        assert_eq!(result.cash_flows.len(), 4);
        assert_eq!(result.cash_flows[0], -150_000.0);
        for cf in &result.cash_flows[1..] {
            assert_eq!(*cf, result.total_annual_savings);
        }
        assert_eq!(result.cashflow_schedule.len(), 4);
        assert_relative_eq!(
            result.npv,
            calculate_npv(&result.cash_flows, 0.08),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_ratios() {
        let result = engine().run_assessment(&reference_profile(), &reference_params()).unwrap();
        let benefits = 426_000.0 * 3.0;
        let proposed = 3_554_000.0 * 3.0 + 150_000.0;
        assert_relative_eq!(result.roi_percentage, (benefits - proposed) / proposed * 100.0, epsilon = 1e-6);
        assert_relative_eq!(result.function_to_cost_ratio, benefits / proposed, epsilon = 1e-9);
        assert_relative_eq!(result.payback_period_years, 150_000.0 / 426_000.0, epsilon = 1e-9);
        let irr = result.irr.unwrap();
        assert_abs_diff_eq!(calculate_npv(&result.cash_flows, irr), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_infrastructure_sizing() {
        let result = engine().run_assessment(&reference_profile(), &reference_params()).unwrap();
        let sizing = &result.infrastructure_sizing;
        assert_eq!(sizing.edition, "AWS Enterprise");
        // (1.5M * 0.5 - 225k) / 3.00
        assert_relative_eq!(sizing.estimated_annual_credits, 175_000.0, epsilon = 1e-6);
        // ((500k * 0.5 - 75k) / 12) / 23.00
        assert_relative_eq!(sizing.estimated_storage_tb, 175_000.0 / 12.0 / 23.0, epsilon = 1e-9);
    }

    #[test]
    fn test_horizon_scales_linearly() {
        let e = engine();
        let profile = reference_profile();
        let three = e.run_assessment(&profile, &reference_params().with_years(3)).unwrap();
        let six = e.run_assessment(&profile, &reference_params().with_years(6)).unwrap();

        assert_relative_eq!(six.baseline_total_tco, 2.0 * three.baseline_total_tco);
        assert_eq!(six.baseline_annual_tco, three.baseline_annual_tco);
        assert_eq!(six.proposed_annual_tco, three.proposed_annual_tco);
        assert_eq!(six.total_annual_savings, three.total_annual_savings);
        assert_eq!(six.cash_flows.len(), 7);
    }

    #[test]
    fn test_zero_savings_never_pays_back() {
        let profile = CostProfile {
            infrastructure_cost: 100_000.0,
            compute_cost: 0.0,
            storage_cost: 0.0,
            licensing_cost: 0.0,
            headcount: 0,
            average_salary: 0.0,
        };
        let result = engine().run_assessment(&profile, &AssessmentParams::default()).unwrap();
        assert_eq!(result.total_annual_savings, 0.0);
        assert_eq!(result.payback_period_years, f64::INFINITY);
        assert!(result.summary().payback_months.is_infinite());
    }

    #[test]
    fn test_never_pays_back_survives_json() {
        let profile = CostProfile {
            infrastructure_cost: 100_000.0,
            compute_cost: 0.0,
            storage_cost: 0.0,
            licensing_cost: 0.0,
            headcount: 0,
            average_salary: 0.0,
        };
        let result = engine().run_assessment(&profile, &AssessmentParams::default()).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"payback_period_years\":null"));
        let back: AssessmentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.payback_period_years, f64::INFINITY);

        let summary_json = serde_json::to_string(&result.summary()).unwrap();
        let summary: ExecutiveSummary = serde_json::from_str(&summary_json).unwrap();
        assert!(summary.payback_months.is_infinite());
    }

    #[test]
    fn test_finite_payback_survives_json() {
        let result = engine().run_assessment(&reference_profile(), &reference_params()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: AssessmentResult = serde_json::from_str(&json).unwrap();
        assert_relative_eq!(back.payback_period_years, result.payback_period_years, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_proposed_cost_guards() {
        let profile = CostProfile {
            infrastructure_cost: 0.0,
            compute_cost: 0.0,
            storage_cost: 0.0,
            licensing_cost: 0.0,
            headcount: 0,
            average_salary: 0.0,
        };
        let params = AssessmentParams {
            implementation_cost: 0.0,
            ..AssessmentParams::default()
        };
        let result = engine().run_assessment(&profile, &params).unwrap();
        assert_eq!(result.roi_percentage, 0.0);
        assert_eq!(result.function_to_cost_ratio, 0.0);
        assert_eq!(result.npv, 0.0);
    }

    #[test]
    fn test_invalid_input_rejected_before_computation() {
        let mut profile = reference_profile();
        profile.compute_cost = -1.0;
        let err = engine().run_assessment(&profile, &reference_params()).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidInput { field: "compute_cost", .. }));

        let err = engine()
            .run_assessment(&reference_profile(), &reference_params().with_years(0))
            .unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidInput { field: "analysis_years", .. }));

        // Rejected before the cash-flow vector is sized
        let err = engine()
            .run_assessment(&reference_profile(), &reference_params().with_years(u32::MAX))
            .unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidInput { field: "analysis_years", .. }));
        let longest = reference_params().with_years(crate::profile::MAX_ANALYSIS_YEARS);
        let result = engine().run_assessment(&reference_profile(), &longest).unwrap();
        assert_eq!(result.cash_flows.len(), crate::profile::MAX_ANALYSIS_YEARS as usize + 1);

        let bad_engine = ValuationEngine::new(Benchmarks::new(1.2, 0.3));
        assert!(bad_engine.run_assessment(&reference_profile(), &reference_params()).is_err());
    }

    #[test]
    fn test_compute_benchmark_only_moves_compute() {
        let low = ValuationEngine::new(Benchmarks::new(0.30, 0.30));
        let high = ValuationEngine::new(Benchmarks::new(0.40, 0.90));
        let a = low.run_assessment(&reference_profile(), &reference_params()).unwrap();
        let b = high.run_assessment(&reference_profile(), &reference_params()).unwrap();
        assert!(b.savings.compute > a.savings.compute);
        assert_eq!(a.savings.storage, b.savings.storage);
        assert_eq!(a.savings.productivity, b.savings.productivity);
    }

    #[test]
    fn test_free_function_matches_engine() {
        let b = Benchmarks::default();
        let via_fn = run_assessment(&reference_profile(), &b, &reference_params()).unwrap();
        let via_engine = ValuationEngine::new(b).run_assessment(&reference_profile(), &reference_params()).unwrap();
        assert_eq!(via_fn.npv, via_engine.npv);
    }

    #[test]
    fn test_summary_total_savings() {
        let result = engine().run_assessment(&reference_profile(), &reference_params()).unwrap();
        let summary = result.summary();
        assert_relative_eq!(
            summary.total_savings,
            result.baseline_total_tco - result.proposed_total_tco
        );
        assert_relative_eq!(summary.payback_months, result.payback_period_years * 12.0);
    }
}
