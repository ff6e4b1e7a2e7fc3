//! Billing-cycle normalization
//!
//! Converts a `(price, interval, unit)` triple into comparable monthly and
//! yearly costs. The conversion constants are fixed (30-day month,
//! 4.33-week month) rather than calendar-exact: totals are estimates for
//! comparison across cadences, not accounting-grade sums.

use crate::model::{BillingCycle, TimeUnit};

/// Days assumed per month when normalizing day-based cycles
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Weeks assumed per month when normalizing week-based cycles
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Months per year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Monthly-equivalent cost of `price` billed every `cycle`.
pub fn monthly_equivalent(price: f64, cycle: &BillingCycle) -> f64 {
    let interval = f64::from(cycle.interval);
    match cycle.unit {
        TimeUnit::Days => (price / interval) * DAYS_PER_MONTH,
        TimeUnit::Weeks => (price / interval) * WEEKS_PER_MONTH,
        TimeUnit::Months => price / interval,
        TimeUnit::Years => (price / interval) / MONTHS_PER_YEAR,
    }
}

/// Yearly-equivalent cost of `price` billed every `cycle`.
pub fn yearly_equivalent(price: f64, cycle: &BillingCycle) -> f64 {
    let interval = f64::from(cycle.interval);
    match cycle.unit {
        TimeUnit::Years => price / interval,
        _ => monthly_equivalent(price, cycle) * MONTHS_PER_YEAR,
    }
}

/// Human cadence label: "monthly", "every 3 months".
///
/// The single-interval form strips the plural "s" and appends "ly", which
/// yields "dayly" for day cycles. Known defect, kept for parity with the
/// shipped behavior; see DESIGN.md.
pub fn cadence_label(cycle: &BillingCycle) -> String {
    if cycle.interval == 1 {
        let plural = cycle.unit.plural();
        let stem = &plural[..plural.len() - 1];
        format!("{stem}ly")
    } else {
        format!("every {} {}", cycle.interval, cycle.unit.plural())
    }
}
