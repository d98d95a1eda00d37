//! Loan scenario records: saved what-if models and their projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::loan::{Frequency, LoanResult, calculate_loan};

/// A saved loan/budget scenario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanScenario {
    /// Unique identifier for this scenario
    pub id: String,
    /// Human-readable name ("Car loan", "Mortgage renewal")
    pub name: String,
    /// Borrowed amount
    pub principal: f64,
    /// Display currency code
    pub currency: String,
    /// Loan term in months
    pub term_months: u32,
    /// Nominal annual rate as a decimal
    pub fixed_annual_rate: f64,
    /// Payment cadence
    pub payment_frequency: Frequency,
    /// Whether this scenario counts toward the monthly budget total
    pub include_in_totals: bool,
    /// When the scenario was saved
    pub created_at: DateTime<Utc>,
}

impl LoanScenario {
    /// Create a new scenario, active in budget totals by default
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        principal: f64,
        currency: impl Into<String>,
        term_months: u32,
        fixed_annual_rate: f64,
        payment_frequency: Frequency,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            principal,
            currency: currency.into(),
            term_months,
            fixed_annual_rate,
            payment_frequency,
            include_in_totals: true,
            created_at,
        }
    }

    /// Projection stats for this scenario
    pub fn stats(&self) -> LoanResult {
        calculate_loan(
            self.principal,
            self.term_months,
            self.fixed_annual_rate,
            self.payment_frequency,
        )
    }

    /// Per-month equivalent of the periodic payment, for budget totals
    pub fn monthly_payment(&self) -> f64 {
        self.stats().payment * self.payment_frequency.payments_per_year() as f64 / 12.0
    }
}

/// Sum of monthly payments across scenarios marked active in the budget
pub fn monthly_total(scenarios: &[LoanScenario]) -> f64 {
    scenarios
        .iter()
        .filter(|s| s.include_in_totals)
        .map(|s| s.monthly_payment())
        .sum()
}

/// One-line context string handed to the AI insights service.
/// Covers at most the first five scenarios.
pub fn summarize_scenarios(scenarios: &[LoanScenario]) -> String {
    if scenarios.is_empty() {
        return "No scenarios saved.".to_string();
    }

    scenarios
        .iter()
        .take(5)
        .map(|s| {
            format!(
                "{}: ${:.0}, {}mo, {}, rate={}",
                s.name,
                s.principal,
                s.term_months,
                s.payment_frequency.as_str(),
                s.fixed_annual_rate
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn scenario(id: &str, name: &str, principal: f64, freq: Frequency) -> LoanScenario {
        let created = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();
        LoanScenario::new(id, name, principal, "CAD", 12, 0.0, freq, created)
    }

    #[test]
    fn test_stats_delegate_to_loan_calculator() {
        let s = scenario("scn-001", "Car", 1200.0, Frequency::Monthly);
        let stats = s.stats();
        assert_eq!(stats.payment, 100.0);
        assert_eq!(stats.total_paid, 1200.0);
    }

    #[test]
    fn test_monthly_payment_normalizes_frequency() {
        // 2600 over 12 months at 0% biweekly: 26 payments of 100,
        // so the monthly equivalent is 2600 / 12.
        let s = scenario("scn-001", "Bike", 2600.0, Frequency::Biweekly);
        assert!((s.monthly_payment() - 2600.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_total_skips_inactive() {
        let mut a = scenario("scn-001", "A", 1200.0, Frequency::Monthly);
        let b = scenario("scn-002", "B", 2400.0, Frequency::Monthly);
        a.include_in_totals = false;
        assert!((monthly_total(&[a, b]) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_scenario_json_wire_format() {
        let s = scenario("scn-001", "Car", 1200.0, Frequency::Biweekly);
        let json = serde_json::to_string(&s).unwrap();
        // Frequency stores in the uppercase wire form.
        assert!(json.contains("\"BIWEEKLY\""));
        let back: LoanScenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(summarize_scenarios(&[]), "No scenarios saved.");
    }

    #[test]
    fn test_summary_format_and_cap() {
        let mut list = Vec::new();
        for i in 0..7 {
            let mut s = scenario(&format!("scn-{i:03}"), &format!("S{i}"), 1000.0, Frequency::Monthly);
            s.fixed_annual_rate = 0.05;
            list.push(s);
        }
        let summary = summarize_scenarios(&list);
        assert!(summary.starts_with("S0: $1000, 12mo, MONTHLY, rate=0.05"));
        assert_eq!(summary.matches("; ").count(), 4); // only the first 5
        assert!(!summary.contains("S5"));
    }
}
