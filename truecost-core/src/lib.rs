//! truecost-core: pure financial computations for the TrueCost tracker.
//!
//! Three independent calculators (loan amortization, credit-card payoff,
//! time cost of a purchase) plus the value records the CLI persists.
//! Nothing here does I/O, holds state, or returns errors: degenerate
//! input maps to an all-zero result.

pub mod loan;
pub mod payoff;
pub mod scenario;
pub mod subscription;
pub mod timecost;

pub use loan::{Frequency, LoanResult, calculate_loan, effective_period_rate};
pub use payoff::{CreditCardPlan, MAX_MONTHS, PayoffResult, calculate_credit_card_payoff};
pub use scenario::{LoanScenario, summarize_scenarios};
pub use subscription::{BillingCycle, Subscription};
pub use timecost::{DEFAULT_TAX_RATE, TimeCostResult, WorkTime, calculate_time_cost};
