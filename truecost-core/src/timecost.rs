//! Price-to-labor conversion: what a purchase costs in hours of
//! net-of-tax work.

use serde::{Deserialize, Serialize};

/// Tax rate assumed when the caller has none on file
pub const DEFAULT_TAX_RATE: f64 = 0.25;

const WORKDAY_HOURS: f64 = 8.0;

/// Work-time decomposition of a price, on 8-hour workdays.
///
/// `minutes` can be exactly 60: when the fractional hour sits just under
/// a whole hour, `hours` floors down and the remainder rounds up to a
/// full 60 minutes. Callers render it as-is; see the crate tests.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkTime {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
}

/// Labor equivalent of a price
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TimeCostResult {
    /// Take-home pay per hour after tax
    pub net_hourly_rate: f64,
    /// Raw decimal hours of work equivalent to the price
    pub total_hours: f64,
    pub display: WorkTime,
}

/// Convert a price into hours of take-home labor at `hourly_rate` gross,
/// taxed at `tax_rate` (a decimal fraction; [`DEFAULT_TAX_RATE`] when the
/// caller has nothing better). A non-positive wage returns the all-zero
/// result rather than dividing by zero.
pub fn calculate_time_cost(price: f64, hourly_rate: f64, tax_rate: f64) -> TimeCostResult {
    if hourly_rate <= 0.0 {
        return TimeCostResult::default();
    }

    let net_hourly_rate = hourly_rate * (1.0 - tax_rate);
    let raw_hours = price / net_hourly_rate;

    let days = (raw_hours / WORKDAY_HOURS).floor();
    let remainder_hours = raw_hours % WORKDAY_HOURS;
    let hours = remainder_hours.floor();
    let minutes = ((remainder_hours - hours) * 60.0).round();

    TimeCostResult {
        net_hourly_rate,
        total_hours: raw_hours,
        display: WorkTime {
            days: days as u32,
            hours: hours as u32,
            minutes: minutes as u32,
        },
    }
}
