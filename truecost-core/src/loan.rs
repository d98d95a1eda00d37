//! Amortized loan math: periodic payment, total interest, total cost.

use serde::{Deserialize, Serialize};

/// How often a loan payment comes due.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Frequency {
    #[default]
    #[serde(rename = "MONTHLY")]
    Monthly,
    #[serde(rename = "BIWEEKLY")]
    Biweekly,
    #[serde(rename = "WEEKLY")]
    Weekly,
}

impl Frequency {
    /// Parse a stored frequency string, case-insensitively.
    /// Anything unrecognized (including empty) falls back to monthly.
    pub fn normalize(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "BIWEEKLY" => Frequency::Biweekly,
            "WEEKLY" => Frequency::Weekly,
            _ => Frequency::Monthly,
        }
    }

    /// Number of payments due per year
    pub fn payments_per_year(&self) -> u32 {
        match self {
            Frequency::Monthly => 12,
            Frequency::Biweekly => 26,
            Frequency::Weekly => 52,
        }
    }

    /// Uppercase wire form, matching the stored records
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Monthly => "MONTHLY",
            Frequency::Biweekly => "BIWEEKLY",
            Frequency::Weekly => "WEEKLY",
        }
    }
}

/// Projection for a fixed-rate installment loan
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct LoanResult {
    /// Amount due per period, at the input's frequency
    pub payment: f64,
    /// payment x number of periods
    pub total_paid: f64,
    /// total_paid - principal
    pub total_interest: f64,
    /// Total interest as a percentage of principal. UI scaling aid,
    /// not a financial rate.
    pub ratio: f64,
}

/// Convert a nominal annual rate to the rate that compounds exactly once
/// per payment period: `(1 + rate)^(1/n) - 1`, not `rate / n`.
/// Zero and negative rates map to 0.
pub fn effective_period_rate(rate: f64, payments_per_year: u32) -> f64 {
    if rate > 0.0 {
        (1.0 + rate).powf(1.0 / payments_per_year as f64) - 1.0
    } else {
        0.0
    }
}

/// Compute the fixed periodic payment that fully amortizes `principal`
/// over `months` at the nominal annual `rate`, paying at `frequency`.
///
/// Degenerate input (zero principal or zero term) returns the all-zero
/// result; this function never panics for finite numeric input.
pub fn calculate_loan(principal: f64, months: u32, rate: f64, frequency: Frequency) -> LoanResult {
    if principal == 0.0 || months == 0 {
        return LoanResult::default();
    }

    let payments_per_year = frequency.payments_per_year();
    // At least one period, so degenerate short terms cannot divide by zero.
    let periods = ((months as f64 / 12.0) * payments_per_year as f64)
        .round()
        .max(1.0);
    let period_rate = effective_period_rate(rate, payments_per_year);

    let payment = if period_rate == 0.0 {
        principal / periods
    } else {
        let growth = (1.0 + period_rate).powf(periods);
        principal * period_rate * growth / (growth - 1.0)
    };

    let total_paid = payment * periods;
    let total_interest = total_paid - principal;

    LoanResult {
        payment,
        total_paid,
        total_interest,
        ratio: if principal > 0.0 {
            total_interest / principal * 100.0
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_frequency() {
        assert_eq!(Frequency::normalize("biweekly"), Frequency::Biweekly);
        assert_eq!(Frequency::normalize("WEEKLY"), Frequency::Weekly);
        assert_eq!(Frequency::normalize("Monthly"), Frequency::Monthly);
        assert_eq!(Frequency::normalize(""), Frequency::Monthly);
        assert_eq!(Frequency::normalize("fortnightly"), Frequency::Monthly);
    }

    #[test]
    fn test_degenerate_input_returns_zeros() {
        let zero = LoanResult::default();
        assert_eq!(calculate_loan(0.0, 12, 0.05, Frequency::Monthly), zero);
        assert_eq!(calculate_loan(100.0, 0, 0.05, Frequency::Monthly), zero);
    }

    #[test]
    fn test_zero_rate_is_simple_division() {
        let result = calculate_loan(1200.0, 12, 0.0, Frequency::Monthly);
        assert_eq!(result.payment, 100.0);
        assert_eq!(result.total_paid, 1200.0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.ratio, 0.0);
    }

    #[test]
    fn test_negative_rate_degrades_to_zero_rate() {
        let result = calculate_loan(1200.0, 12, -0.05, Frequency::Monthly);
        assert_eq!(result.payment, 100.0);
    }

    #[test]
    fn test_periods_follow_frequency() {
        // One year, zero rate: payment is principal / periods.
        let biweekly = calculate_loan(2600.0, 12, 0.0, Frequency::Biweekly);
        assert_eq!(biweekly.payment, 100.0);

        let weekly = calculate_loan(5200.0, 12, 0.0, Frequency::Weekly);
        assert_eq!(weekly.payment, 100.0);
    }

    #[test]
    fn test_effective_rate_compounds_back_to_annual() {
        for ppy in [12, 26, 52] {
            let r = effective_period_rate(0.05, ppy);
            let annual = (1.0 + r).powi(ppy as i32) - 1.0;
            assert!((annual - 0.05).abs() < 1e-12);
        }
        assert_eq!(effective_period_rate(0.0, 12), 0.0);
        assert_eq!(effective_period_rate(-0.1, 12), 0.0);
    }

    #[test]
    fn test_totals_reconcile() {
        let result = calculate_loan(10_000.0, 60, 0.05, Frequency::Monthly);
        assert!(result.payment > 10_000.0 / 60.0);
        assert!((result.total_paid - (result.total_interest + 10_000.0)).abs() < 1e-9);
        assert!((result.ratio - result.total_interest / 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_term_clamps_to_one_period() {
        // 1 month paid monthly rounds to 1 period; payment covers it all.
        let result = calculate_loan(500.0, 1, 0.0, Frequency::Monthly);
        assert_eq!(result.payment, 500.0);
        assert_eq!(result.total_paid, 500.0);
    }
}
