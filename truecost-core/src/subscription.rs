//! Recurring subscription records and monthly-cost normalization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Billing cadence for a subscription
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BillingCycle {
    #[default]
    #[serde(rename = "MONTHLY")]
    Monthly,
    #[serde(rename = "YEARLY")]
    Yearly,
}

impl BillingCycle {
    /// Parse a stored cycle string, case-insensitively; unrecognized
    /// values fall back to monthly.
    pub fn normalize(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "YEARLY" => BillingCycle::Yearly,
            _ => BillingCycle::Monthly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "MONTHLY",
            BillingCycle::Yearly => "YEARLY",
        }
    }
}

/// A recurring subscription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    /// Amount charged per billing cycle
    pub amount: f64,
    pub billing_cycle: BillingCycle,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        billing_cycle: BillingCycle,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            billing_cycle,
            created_at,
        }
    }

    /// Cost normalized to one month
    pub fn monthly_cost(&self) -> f64 {
        match self.billing_cycle {
            BillingCycle::Monthly => self.amount,
            BillingCycle::Yearly => self.amount / 12.0,
        }
    }
}

/// Combined monthly cost of a subscription list
pub fn monthly_total(subscriptions: &[Subscription]) -> f64 {
    subscriptions.iter().map(|s| s.monthly_cost()).sum()
}
