//! Core financial metrics: TCO, ROI, NPV, payback and IRR
//!
//! All functions are pure. The only edge cases are handled by substitution:
//! ROI against zero cost is 0, and a payback that never happens is +inf.

/// Baseline total cost of ownership: the three annual cost components
/// summed and multiplied over the horizon. No savings applied.
pub fn compute_baseline_tco(infra_cost: f64, licensing_cost: f64, labor_cost: f64, years: u32) -> f64 {
    annual_tco(infra_cost, licensing_cost, labor_cost) * years as f64
}

/// Annual cost of ownership before any migration
pub fn annual_tco(infra_cost: f64, licensing_cost: f64, labor_cost: f64) -> f64 {
    infra_cost + licensing_cost + labor_cost
}

/// ROI as a percentage: ((benefits - costs) / costs) * 100, or 0 when costs are zero
pub fn calculate_roi(total_benefits: f64, total_costs: f64) -> f64 {
    if total_costs == 0.0 {
        return 0.0;
    }
    ((total_benefits - total_costs) / total_costs) * 100.0
}

/// Net present value of yearly cash flows, index 0 undiscounted
pub fn calculate_npv(cash_flows: &[f64], discount_rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / discount_factor_denominator(discount_rate, t))
        .sum()
}

/// Discount factor applied to the cash flow of year `year`
pub fn discount_factor(discount_rate: f64, year: usize) -> f64 {
    1.0 / discount_factor_denominator(discount_rate, year)
}

fn discount_factor_denominator(rate: f64, year: usize) -> f64 {
    (1.0 + rate).powi(year as i32)
}

/// Straight-line payback period in years.
///
/// Returns `f64::INFINITY` when the annual cash flow is zero or negative:
/// the investment is never recovered.
pub fn calculate_payback_period(initial_investment: f64, annual_cash_flow: f64) -> f64 {
    if annual_cash_flow <= 0.0 {
        return f64::INFINITY;
    }
    initial_investment / annual_cash_flow
}

/// Lowest rate the IRR search considers (-99%)
const IRR_FLOOR: f64 = -0.99;

/// The search gives up once the upper bracket passes this rate
const IRR_CEILING: f64 = 1.0e6;

/// Annual Internal Rate of Return of yearly cash flows.
///
/// Brackets a sign change of the NPV curve, then refines with Newton steps
/// that fall back to halving whenever a step leaves the bracket.
///
/// # Returns
/// * `Some(0.0)` for an all-zero sequence
/// * `None` when the flows never change sign or no bracket is found
pub fn calculate_irr(cash_flows: &[f64]) -> Option<f64> {
    let scale = cash_flows.iter().fold(0.0_f64, |m, cf| m.max(cf.abs()));
    if cash_flows.is_empty() {
        return None;
    }
    if scale < 1e-10 {
        return Some(0.0);
    }
    let mixed_signs = cash_flows.iter().any(|&cf| cf > 0.0) && cash_flows.iter().any(|&cf| cf < 0.0);
    if !mixed_signs {
        return None;
    }

    let (mut low, mut high) = bracket_irr(cash_flows)?;
    let mut npv_low = calculate_npv(cash_flows, low);
    let mut rate = (low + high) / 2.0;

    for _ in 0..200 {
        let npv = calculate_npv(cash_flows, rate);
        if npv.abs() <= 1e-9 * scale || high - low < 1e-12 {
            return Some(rate);
        }

        // Keep the root inside [low, high]
        if npv.signum() == npv_low.signum() {
            low = rate;
            npv_low = npv;
        } else {
            high = rate;
        }

        let slope = npv_slope(cash_flows, rate);
        let newton = rate - npv / slope;
        rate = if slope != 0.0 && newton > low && newton < high {
            newton
        } else {
            (low + high) / 2.0
        };
    }

    Some(rate)
}

/// Widen the upper rate until the NPV changes sign across [IRR_FLOOR, high]
fn bracket_irr(cash_flows: &[f64]) -> Option<(f64, f64)> {
    let npv_floor = calculate_npv(cash_flows, IRR_FLOOR);
    let mut high = 1.0;
    while high <= IRR_CEILING {
        if npv_floor * calculate_npv(cash_flows, high) <= 0.0 {
            return Some((IRR_FLOOR, high));
        }
        high *= 2.0;
    }
    None
}

/// d(NPV)/d(rate)
fn npv_slope(cash_flows: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(t, &cf)| -(t as f64) * cf / (1.0 + rate).powi(t as i32 + 1))
        .sum()
}
