//! Output structures of an assessment run

use serde::{Deserialize, Serialize};

use super::levers::LeverSavings;
use super::metrics::discount_factor;

/// One year of the cash-flow projection (year 0 is the implementation outlay)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashflowRow {
    pub year: u32,
    pub cash_flow: f64,
    pub discount_factor: f64,
    pub present_value: f64,
    pub cumulative_cash_flow: f64,
    pub cumulative_present_value: f64,
}

impl CashflowRow {
    /// Expand a raw cash-flow sequence into per-year rows
    pub fn schedule(cash_flows: &[f64], discount_rate: f64) -> Vec<CashflowRow> {
        let mut cumulative = 0.0;
        let mut cumulative_pv = 0.0;

        cash_flows
            .iter()
            .enumerate()
            .map(|(t, &cf)| {
                let df = discount_factor(discount_rate, t);
                let pv = cf * df;
                cumulative += cf;
                cumulative_pv += pv;
                CashflowRow {
                    year: t as u32,
                    cash_flow: cf,
                    discount_factor: df,
                    present_value: pv,
                    cumulative_cash_flow: cumulative,
                    cumulative_present_value: cumulative_pv,
                }
            })
            .collect()
    }
}

/// Illustrative consumption sizing at fixed list prices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfrastructureSizing {
    pub edition: String,
    pub price_per_credit: f64,
    pub price_per_storage_tb_month: f64,
    pub estimated_annual_credits: f64,
    pub estimated_storage_tb: f64,
}

/// Value category a saving is grouped under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueCategory {
    CostReduction,
    RevenueEnablement,
    RiskReduction,
}

impl ValueCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ValueCategory::CostReduction => "Cost Reduction (Cost Value)",
            ValueCategory::RevenueEnablement => "Revenue Enablement (Use Value)",
            ValueCategory::RiskReduction => "Risk Reduction (Esteem & Exchange Value)",
        }
    }

    /// Short name used in driver maps
    pub fn short_label(&self) -> &'static str {
        match self {
            ValueCategory::CostReduction => "Cost Reduction",
            ValueCategory::RevenueEnablement => "Revenue Enablement",
            ValueCategory::RiskReduction => "Risk Reduction",
        }
    }
}

/// A labeled group of savings for presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueBucket {
    pub category: ValueCategory,
    pub lever: String,
    /// Annual amount; `None` for qualitative buckets
    pub annual_value: Option<f64>,
    /// Present when the bucket carries no number
    pub qualitative_note: Option<String>,
    pub description: String,
}

/// The three value buckets of an assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueBuckets {
    pub cost_reduction: ValueBucket,
    pub revenue_enablement: ValueBucket,
    pub risk_reduction: ValueBucket,
}

impl ValueBuckets {
    pub fn from_savings(savings: &LeverSavings) -> Self {
        Self {
            cost_reduction: ValueBucket {
                category: ValueCategory::CostReduction,
                lever: "Infrastructure Efficiency (Compute + Storage)".to_string(),
                annual_value: Some(savings.infrastructure()),
                qualitative_note: None,
                description: "Direct reduction in physical and cloud infrastructure footprint through elastic compute, improving the cost value of the data platform.".to_string(),
            },
            revenue_enablement: ValueBucket {
                category: ValueCategory::RevenueEnablement,
                lever: "Productivity Lift".to_string(),
                annual_value: Some(savings.productivity),
                qualitative_note: None,
                description: "Faster time-to-insight and less administrative overhead free up data engineers, improving the use value of the team.".to_string(),
            },
            risk_reduction: ValueBucket {
                category: ValueCategory::RiskReduction,
                lever: "Reduced Technical Debt".to_string(),
                annual_value: None,
                qualitative_note: Some("Qualitative - a fully managed service removes patching and version upgrades.".to_string()),
                description: "A single governed copy of data limits compliance surface area and makes data sharing easier.".to_string(),
            },
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValueBucket> {
        [&self.cost_reduction, &self.revenue_enablement, &self.risk_reduction].into_iter()
    }
}

/// Complete assessment result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub analysis_years: u32,
    pub baseline_annual_tco: f64,
    /// Baseline over the whole horizon
    pub baseline_total_tco: f64,
    /// Baseline annual minus total annual savings; excludes implementation cost
    pub proposed_annual_tco: f64,
    /// Proposed annual over the horizon plus implementation cost
    pub proposed_total_tco: f64,
    pub savings: LeverSavings,
    pub total_annual_savings: f64,
    /// Raw sequence: [-implementation, savings, savings, ...]
    pub cash_flows: Vec<f64>,
    pub cashflow_schedule: Vec<CashflowRow>,
    pub npv: f64,
    pub irr: Option<f64>,
    pub roi_percentage: f64,
    /// Years; serialized as null when the outlay is never recovered
    #[serde(with = "infinite_as_null")]
    pub payback_period_years: f64,
    pub function_to_cost_ratio: f64,
    pub infrastructure_sizing: InfrastructureSizing,
    pub value_buckets: ValueBuckets,
}

impl AssessmentResult {
    /// Headline figures for the executive summary
    pub fn summary(&self) -> ExecutiveSummary {
        ExecutiveSummary {
            total_savings: self.baseline_total_tco - self.proposed_total_tco,
            payback_months: self.payback_period_years * 12.0,
            roi_percentage: self.roi_percentage,
            npv: self.npv,
            function_to_cost_ratio: self.function_to_cost_ratio,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    /// Baseline minus proposed TCO over the horizon
    pub total_savings: f64,
    #[serde(with = "infinite_as_null")]
    pub payback_months: f64,
    pub roi_percentage: f64,
    pub npv: f64,
    pub function_to_cost_ratio: f64,
}

/// JSON has no infinity: a never-recovered payback is written as `null`
/// and `null` reads back as `f64::INFINITY`.
mod infinite_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_schedule_cumulative() {
        let rows = CashflowRow::schedule(&[-100.0, 60.0, 60.0], 0.0);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].year, 0);
        assert_eq!(rows[0].discount_factor, 1.0);
        assert_eq!(rows[1].cumulative_cash_flow, -40.0);
        assert_eq!(rows[2].cumulative_cash_flow, 20.0);
        assert_eq!(rows[2].cumulative_present_value, 20.0);
    }

    #[test]
    fn test_schedule_matches_npv() {
        let flows = [-150_000.0, 426_000.0, 426_000.0, 426_000.0];
        let rows = CashflowRow::schedule(&flows, 0.08);
        let npv = super::super::metrics::calculate_npv(&flows, 0.08);
        assert_relative_eq!(rows.last().unwrap().cumulative_present_value, npv, epsilon = 1e-6);
    }

    #[test]
    fn test_risk_bucket_is_qualitative() {
        let buckets = ValueBuckets::from_savings(&LeverSavings {
            compute: 1.0,
            storage: 2.0,
            productivity: 3.0,
        });
        assert_eq!(buckets.cost_reduction.annual_value, Some(3.0));
        assert_eq!(buckets.revenue_enablement.annual_value, Some(3.0));
        assert!(buckets.risk_reduction.annual_value.is_none());
        assert!(buckets.risk_reduction.qualitative_note.is_some());
        assert_eq!(buckets.iter().count(), 3);
    }
}
