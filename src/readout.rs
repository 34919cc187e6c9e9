//! One-page executive readout rendered as Markdown

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::valuation::AssessmentResult;

/// Labels and context printed around the numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadoutContext {
    pub company: String,
    pub use_case: String,
    pub migration_fraction: f64,
    pub prepared_on: NaiveDate,
}

/// Format a currency amount with thousands separators and no cents
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Payback period in months, or a note when it never happens
pub fn format_payback_months(payback_years: f64) -> String {
    if payback_years.is_finite() {
        format!("{:.1}-month", payback_years * 12.0)
    } else {
        "no".to_string()
    }
}

/// Render the executive readout
pub fn render_readout(ctx: &ReadoutContext, result: &AssessmentResult) -> String {
    let summary = result.summary();
    let sizing = &result.infrastructure_sizing;
    let buckets = &result.value_buckets;
    let pct = (ctx.migration_fraction * 100.0).round() as i64;
    let years = result.analysis_years;

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "# Value Engineering Executive Readout: {}", ctx.company);
    let _ = writeln!(out, "_Prepared {}_", ctx.prepared_on.format("%B %-d, %Y"));
    let _ = writeln!(out);
    let _ = writeln!(out, "## Executive Summary");
    let _ = writeln!(out, "Migrating {}% of {} workloads yields:", pct, ctx.use_case);
    let _ = writeln!(
        out,
        "- **{}** total savings over {} years",
        format_currency(summary.total_savings),
        years
    );
    let _ = writeln!(out, "- **{}** payback period", format_payback_months(result.payback_period_years));
    let _ = writeln!(out, "- **{:.1}%** Return on Investment", summary.roi_percentage);
    let _ = writeln!(out, "- **{:.2}x** value-to-cost ratio", summary.function_to_cost_ratio);
    let _ = writeln!(out);
    let _ = writeln!(out, "## Financial Breakdown");
    let _ = writeln!(out, "- **Baseline Cost (Do Nothing)**: {}", format_currency(result.baseline_total_tco));
    let _ = writeln!(out, "- **Proposed Cost**: {}", format_currency(result.proposed_total_tco));
    let _ = writeln!(out, "- **Net Present Value**: {}", format_currency(result.npv));
    if let Some(irr) = result.irr {
        let _ = writeln!(out, "- **Internal Rate of Return**: {:.1}%", irr * 100.0);
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "*(Includes ~{} credits/yr compute and {} TB/month storage on {})*",
        format_currency(sizing.estimated_annual_credits).trim_start_matches('$'),
        format_currency(sizing.estimated_storage_tb).trim_start_matches('$'),
        sizing.edition
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## Value Drivers");
    for bucket in buckets.iter() {
        match bucket.annual_value {
            Some(v) => {
                let _ = writeln!(
                    out,
                    "- **{}**: +{}/yr ({})",
                    bucket.category.short_label(),
                    format_currency(v),
                    bucket.lever
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "- **{}**: Qualitative ({})",
                    bucket.category.short_label(),
                    bucket.lever
                );
            }
        }
    }

    out
}
