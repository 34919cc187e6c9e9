//! Valuation engine: savings levers, financial metrics and the assessment run

mod engine;
mod levers;
mod metrics;
mod result;

pub use engine::{
    run_assessment, ValuationEngine, PRICE_PER_CREDIT_ENTERPRISE, PRICE_PER_TB_STORAGE_MONTHLY,
    SIZING_EDITION,
};
pub use levers::{
    estimate_compute_savings, estimate_productivity_lift, estimate_productivity_lift_at,
    estimate_storage_savings, estimate_storage_savings_at, LeverSavings, STORAGE_COMPRESSION_RATE,
    TIME_SAVINGS_RATE,
};
pub use metrics::{
    annual_tco, calculate_irr, calculate_npv, calculate_payback_period, calculate_roi,
    compute_baseline_tco, discount_factor,
};
pub use result::{
    AssessmentResult, CashflowRow, ExecutiveSummary, InfrastructureSizing, ValueBucket,
    ValueBuckets, ValueCategory,
};
