//! Property suite for the three calculators: reconciliation invariants,
//! termination bounds, and display decomposition sanity.

use proptest::prelude::*;
use truecost_core::{
    CreditCardPlan, Frequency, MAX_MONTHS, calculate_credit_card_payoff, calculate_loan,
    calculate_time_cost,
};

fn frequency_strategy() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Monthly),
        Just(Frequency::Biweekly),
        Just(Frequency::Weekly),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// total_paid always reconciles to total_interest + principal.
    #[test]
    fn loan_totals_reconcile(
        principal in 1.0f64..1_000_000.0,
        months in 1u32..480,
        rate in 0.0f64..0.5,
        frequency in frequency_strategy(),
    ) {
        let result = calculate_loan(principal, months, rate, frequency);
        let expected = result.total_interest + principal;
        let tolerance = 1e-9 * result.total_paid.abs().max(1.0);
        prop_assert!((result.total_paid - expected).abs() <= tolerance);
        prop_assert!(result.payment.is_finite());
        prop_assert!(result.payment > 0.0);
    }

    /// With no interest the payment is exactly principal / periods.
    #[test]
    fn loan_zero_rate_is_exact_division(
        principal in 1.0f64..1_000_000.0,
        months in 1u32..480,
    ) {
        // Monthly: periods == months exactly.
        let result = calculate_loan(principal, months, 0.0, Frequency::Monthly);
        prop_assert_eq!(result.payment, principal / months as f64);
        prop_assert!(result.total_interest.abs() < 1e-6);
    }

    /// A positive rate always costs more than the interest-free loan.
    #[test]
    fn loan_interest_never_negative(
        principal in 1.0f64..1_000_000.0,
        months in 1u32..480,
        rate in 0.001f64..0.5,
        frequency in frequency_strategy(),
    ) {
        let result = calculate_loan(principal, months, rate, frequency);
        prop_assert!(result.total_interest > 0.0);
        prop_assert!(result.ratio > 0.0);
    }

    /// The simulation always terminates within the 600-month cap.
    #[test]
    fn payoff_always_terminates(
        balance in 0.0f64..100_000.0,
        rate in 0.0f64..1.0,
        min_pct in 0.005f64..0.1,
        floor in 0.0f64..100.0,
        extra in 0.0f64..200.0,
    ) {
        let plan = CreditCardPlan {
            min_payment_pct: min_pct,
            min_payment_floor: floor,
            extra_payment: extra,
            ..CreditCardPlan::new(balance, rate)
        };
        let result = calculate_credit_card_payoff(&plan);
        prop_assert!(result.months <= MAX_MONTHS);
        prop_assert!(result.total_paid >= 0.0);
        prop_assert!(result.total_interest_paid >= 0.0);
    }

    /// On a convergent plan, paying extra never takes longer or costs more.
    /// Rate stays well below the 3% monthly minimum so the baseline
    /// amortizes inside the cap.
    #[test]
    fn payoff_extra_payment_is_monotonic(
        balance in 100.0f64..10_000.0,
        rate in 0.0f64..0.2,
        extra in 1.0f64..500.0,
    ) {
        let baseline = calculate_credit_card_payoff(&CreditCardPlan::new(balance, rate));
        let with_extra = calculate_credit_card_payoff(&CreditCardPlan {
            extra_payment: extra,
            ..CreditCardPlan::new(balance, rate)
        });
        prop_assert!(baseline.is_debt_free);
        prop_assert!(with_extra.is_debt_free);
        prop_assert!(with_extra.months <= baseline.months);
        prop_assert!(with_extra.total_paid <= baseline.total_paid + 1e-6);
    }

    /// The day/hour/minute decomposition stays within its field bounds
    /// (minutes may legitimately reach 60) and reconstructs total_hours.
    #[test]
    fn timecost_display_decomposes_total_hours(
        price in 0.0f64..100_000.0,
        hourly_rate in 1.0f64..500.0,
        tax_rate in 0.0f64..0.9,
    ) {
        let result = calculate_time_cost(price, hourly_rate, tax_rate);
        let d = result.display;
        prop_assert!(d.hours <= 7);
        prop_assert!(d.minutes <= 60);

        let rebuilt = d.days as f64 * 8.0 + d.hours as f64 + d.minutes as f64 / 60.0;
        // Minute rounding moves the rebuilt value by at most half a minute.
        prop_assert!((rebuilt - result.total_hours).abs() <= 0.5 / 60.0 + 1e-9);

        // Hours of net labor buy back the price.
        prop_assert!((result.total_hours * result.net_hourly_rate - price).abs() <= 1e-6 * price.max(1.0));
    }
}
