//! Per-run inputs: the customer's current spend and the assessment parameters

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;

/// Default share of workloads assumed to migrate (40%)
pub const DEFAULT_MIGRATION_FRACTION: f64 = 0.40;

/// Default annual discount rate for NPV (8%)
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.08;

/// Default analysis horizon in years
pub const DEFAULT_ANALYSIS_YEARS: u32 = 3;

/// Longest horizon accepted by `AssessmentParams::validate`
pub const MAX_ANALYSIS_YEARS: u32 = 50;

/// Default one-time implementation / migration outlay
pub const DEFAULT_IMPLEMENTATION_COST: f64 = 150_000.0;

/// Current annual spend of the prospective customer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostProfile {
    /// Servers, hardware and hosting
    pub infrastructure_cost: f64,
    /// Spend on running compute workloads
    pub compute_cost: f64,
    /// Spend on storing data
    pub storage_cost: f64,
    /// Software licenses
    pub licensing_cost: f64,
    /// Data engineers / analysts on the platform
    pub headcount: u32,
    /// Average fully-loaded salary per head
    pub average_salary: f64,
}

impl CostProfile {
    /// Annual labor cost of the data team
    pub fn labor_cost(&self) -> f64 {
        self.headcount as f64 * self.average_salary
    }

    pub fn validate(&self) -> Result<(), AssessmentError> {
        non_negative("infrastructure_cost", self.infrastructure_cost)?;
        non_negative("compute_cost", self.compute_cost)?;
        non_negative("storage_cost", self.storage_cost)?;
        non_negative("licensing_cost", self.licensing_cost)?;
        non_negative("average_salary", self.average_salary)?;
        Ok(())
    }
}

/// Knobs of a single assessment run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentParams {
    /// Share of current workload moving to the new platform, in (0, 1]
    pub migration_fraction: f64,
    /// Annual discount rate used for NPV
    pub discount_rate: f64,
    /// Horizon in whole years
    pub analysis_years: u32,
    /// One-time outlay booked at year 0
    pub implementation_cost: f64,
}

impl Default for AssessmentParams {
    fn default() -> Self {
        Self {
            migration_fraction: DEFAULT_MIGRATION_FRACTION,
            discount_rate: DEFAULT_DISCOUNT_RATE,
            analysis_years: DEFAULT_ANALYSIS_YEARS,
            implementation_cost: DEFAULT_IMPLEMENTATION_COST,
        }
    }
}

impl AssessmentParams {
    /// Same parameters with a different migration fraction
    pub fn with_migration_fraction(mut self, fraction: f64) -> Self {
        self.migration_fraction = fraction;
        self
    }

    /// Same parameters with a different horizon
    pub fn with_years(mut self, years: u32) -> Self {
        self.analysis_years = years;
        self
    }

    pub fn validate(&self) -> Result<(), AssessmentError> {
        let f = self.migration_fraction;
        if !f.is_finite() || f <= 0.0 || f > 1.0 {
            return Err(AssessmentError::invalid(
                "migration_fraction",
                format!("{} is outside (0, 1]", f),
            ));
        }
        non_negative("discount_rate", self.discount_rate)?;
        if self.analysis_years == 0 {
            return Err(AssessmentError::invalid(
                "analysis_years",
                "horizon must be at least one year",
            ));
        }
        if self.analysis_years > MAX_ANALYSIS_YEARS {
            return Err(AssessmentError::invalid(
                "analysis_years",
                format!("{} exceeds the {}-year maximum", self.analysis_years, MAX_ANALYSIS_YEARS),
            ));
        }
        non_negative("implementation_cost", self.implementation_cost)?;
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), AssessmentError> {
    if !value.is_finite() {
        return Err(AssessmentError::invalid(field, format!("{} is not finite", value)));
    }
    if value < 0.0 {
        return Err(AssessmentError::invalid(field, format!("{} is negative", value)));
    }
    Ok(())
}
