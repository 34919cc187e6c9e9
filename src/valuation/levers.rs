//! Savings levers of a migration
//!
//! Every lever is purely proportional to the migration fraction; no
//! diminishing returns are modeled.

use serde::{Deserialize, Serialize};

/// Fixed storage compression improvement (30%).
///
/// Deliberately independent of `Benchmarks::storage_compression_improvement`:
/// compute savings follow the loaded benchmark, storage savings do not.
pub const STORAGE_COMPRESSION_RATE: f64 = 0.30;

/// Share of a data engineer's time freed from maintenance work (15%)
pub const TIME_SAVINGS_RATE: f64 = 0.15;

/// Compute elasticity savings: cost * (fraction * benchmark)
pub fn estimate_compute_savings(current_compute_cost: f64, migration_fraction: f64, efficiency_benchmark: f64) -> f64 {
    current_compute_cost * (migration_fraction * efficiency_benchmark)
}

/// Storage savings from columnar compression at `STORAGE_COMPRESSION_RATE`
pub fn estimate_storage_savings(current_storage_cost: f64, migration_fraction: f64) -> f64 {
    estimate_storage_savings_at(current_storage_cost, migration_fraction, STORAGE_COMPRESSION_RATE)
}

/// Storage savings at an explicit compression rate
pub fn estimate_storage_savings_at(current_storage_cost: f64, migration_fraction: f64, compression_rate: f64) -> f64 {
    current_storage_cost * (migration_fraction * compression_rate)
}

/// Productivity lift of the data team at `TIME_SAVINGS_RATE`
pub fn estimate_productivity_lift(headcount: u32, salary: f64, migration_fraction: f64) -> f64 {
    estimate_productivity_lift_at(headcount, salary, migration_fraction, TIME_SAVINGS_RATE)
}

/// Productivity lift at an explicit time-savings rate
pub fn estimate_productivity_lift_at(headcount: u32, salary: f64, migration_fraction: f64, time_savings_rate: f64) -> f64 {
    let total_labor_cost = headcount as f64 * salary;
    total_labor_cost * (migration_fraction * time_savings_rate)
}

/// Annual savings per lever
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LeverSavings {
    pub compute: f64,
    pub storage: f64,
    pub productivity: f64,
}

impl LeverSavings {
    /// Total annual savings across levers
    pub fn total(&self) -> f64 {
        self.compute + self.storage + self.productivity
    }

    /// Infrastructure portion (compute + storage)
    pub fn infrastructure(&self) -> f64 {
        self.compute + self.storage
    }
}
