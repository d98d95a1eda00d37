//! Credit-card payoff simulation: month-by-month amortization under a
//! minimum-payment policy, a fixed payment, or either plus a snowball.

use serde::{Deserialize, Serialize};

/// Hard stop for plans that never pay down the balance (50 years).
pub const MAX_MONTHS: u32 = 600;

/// Floating-point tolerance for treating the ending balance as paid off.
const DEBT_FREE_TOLERANCE: f64 = 0.01;

/// Parameters for a credit-card payoff simulation.
///
/// `Default` supplies the standard minimum-payment policy: 3% of the
/// current balance with a $10 floor, no fixed override, no extra payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreditCardPlan {
    /// Outstanding balance at the start of the simulation
    pub balance: f64,
    /// Nominal annual rate as a decimal (0.1999 for 19.99% APR)
    pub interest_rate: f64,
    /// Minimum payment as a fraction of the current balance
    pub min_payment_pct: f64,
    /// Absolute floor on the minimum payment
    pub min_payment_floor: f64,
    /// Fixed monthly payment that replaces the minimum-payment policy
    pub monthly_payment_override: Option<f64>,
    /// Snowball amount added on top of whichever payment applies
    pub extra_payment: f64,
}

impl Default for CreditCardPlan {
    fn default() -> Self {
        Self {
            balance: 0.0,
            interest_rate: 0.0,
            min_payment_pct: 0.03,
            min_payment_floor: 10.0,
            monthly_payment_override: None,
            extra_payment: 0.0,
        }
    }
}

impl CreditCardPlan {
    /// Plan with the default minimum-payment policy
    pub fn new(balance: f64, interest_rate: f64) -> Self {
        Self {
            balance,
            interest_rate,
            ..Self::default()
        }
    }
}

/// Outcome of a payoff simulation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PayoffResult {
    /// Months simulated until payoff, capped at [`MAX_MONTHS`]
    pub months: u32,
    pub total_interest_paid: f64,
    pub total_paid: f64,
    /// False means the cap was hit before the balance reached zero —
    /// the plan never pays off the debt. Not an error.
    pub is_debt_free: bool,
}

/// Simulate paying down a credit-card balance one month at a time.
///
/// Interest accrues first; the payment covers interest before principal,
/// so a payment smaller than the month's interest grows the balance
/// (negative amortization). The loop always terminates: either the
/// balance hits zero or the 600-month cap trips. Never returns an error
/// for any input combination.
pub fn calculate_credit_card_payoff(plan: &CreditCardPlan) -> PayoffResult {
    let mut current_balance = plan.balance;
    let mut total_interest_paid = 0.0;
    let mut total_paid = 0.0;
    let mut months = 0;

    let monthly_rate = plan.interest_rate / 12.0;

    while current_balance > 0.0 && months < MAX_MONTHS {
        months += 1;

        let interest = current_balance * monthly_rate;

        // Fixed payment if set, otherwise the larger of the percentage
        // minimum and the floor. Snowball rides on top of either.
        let mut payment = match plan.monthly_payment_override {
            Some(fixed) => fixed,
            None => (current_balance * plan.min_payment_pct).max(plan.min_payment_floor),
        };
        payment += plan.extra_payment;

        // Final month: settle the remaining balance plus its interest.
        let amount_owed = current_balance + interest;
        if payment >= amount_owed {
            total_paid += amount_owed;
            total_interest_paid += interest;
            current_balance = 0.0;
            break;
        }

        // Interest first, remainder to principal. principal_paid goes
        // negative when the payment does not cover the interest.
        total_paid += payment;
        total_interest_paid += interest;
        let principal_paid = payment - interest;
        current_balance -= principal_paid;
    }

    PayoffResult {
        months,
        total_interest_paid,
        total_paid,
        is_debt_free: current_balance <= DEBT_FREE_TOLERANCE,
    }
}
