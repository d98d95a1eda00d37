use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use truecost_core::{
    BillingCycle, CreditCardPlan, Frequency, LoanScenario, Subscription,
    calculate_credit_card_payoff, calculate_loan, calculate_time_cost, scenario, subscription,
    summarize_scenarios,
};

mod setup;
mod state;

#[derive(Parser, Debug)]
#[command(name = "truecost", version, about = "TrueCost personal finance CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One-time interactive setup: capture your income profile
    Setup,

    /// Project a fixed-rate loan: periodic payment and total cost
    Loan {
        #[arg(long)]
        principal: f64,

        /// Term in months
        #[arg(long)]
        months: u32,

        /// Annual rate as a decimal (0.05 = 5%)
        #[arg(long, default_value_t = 0.0)]
        rate: f64,

        /// MONTHLY, BIWEEKLY, or WEEKLY (case-insensitive)
        #[arg(long, default_value = "MONTHLY")]
        frequency: String,
    },

    /// Simulate paying off a credit-card balance month by month
    Payoff {
        #[arg(long)]
        balance: f64,

        /// Annual APR as a decimal (0.1999 = 19.99%)
        #[arg(long)]
        rate: f64,

        /// Minimum payment as a fraction of the balance
        #[arg(long, default_value_t = 0.03)]
        min_pct: f64,

        /// Absolute floor on the minimum payment
        #[arg(long, default_value_t = 10.0)]
        floor: f64,

        /// Fixed monthly payment instead of the minimum policy
        #[arg(long)]
        payment: Option<f64>,

        /// Extra amount added on top of every payment
        #[arg(long, default_value_t = 0.0)]
        extra: f64,
    },

    /// Convert a price into hours of take-home labor
    Timecost {
        price: f64,

        /// Gross hourly wage (defaults to your profile)
        #[arg(long)]
        hourly_rate: Option<f64>,

        /// Tax rate as a decimal (defaults to your profile)
        #[arg(long)]
        tax_rate: Option<f64>,
    },

    /// Saved loan scenarios
    Scenario {
        #[command(subcommand)]
        command: ScenarioCommand,
    },

    /// Recurring subscriptions
    Sub {
        #[command(subcommand)]
        command: SubCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ScenarioCommand {
    /// Save a new loan scenario
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        principal: f64,

        /// Term in months
        #[arg(long)]
        months: u32,

        /// Annual rate as a decimal
        #[arg(long, default_value_t = 0.0)]
        rate: f64,

        /// MONTHLY, BIWEEKLY, or WEEKLY
        #[arg(long, default_value = "MONTHLY")]
        frequency: String,

        /// Currency code (defaults to your profile)
        #[arg(long)]
        currency: Option<String>,

        /// Exclude this scenario from the monthly budget total
        #[arg(long)]
        inactive: bool,
    },

    /// List saved scenarios with their payments
    List,

    /// Show one scenario's full projection
    Show { id: String },

    /// Delete a scenario
    Rm { id: String },

    /// Print the one-line context string sent to the AI insights service
    Summary,
}

#[derive(Subcommand, Debug)]
enum SubCommand {
    /// Track a new subscription
    Add {
        #[arg(long)]
        name: String,

        /// Amount charged per billing cycle
        #[arg(long)]
        amount: f64,

        /// MONTHLY or YEARLY
        #[arg(long, default_value = "MONTHLY")]
        cycle: String,
    },

    /// List subscriptions with the combined monthly cost
    List,

    /// Stop tracking a subscription
    Rm { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Setup => setup::run_setup()?,

        Command::Loan {
            principal,
            months,
            rate,
            frequency,
        } => run_loan(principal, months, rate, &frequency),

        Command::Payoff {
            balance,
            rate,
            min_pct,
            floor,
            payment,
            extra,
        } => run_payoff(balance, rate, min_pct, floor, payment, extra),

        Command::Timecost {
            price,
            hourly_rate,
            tax_rate,
        } => run_timecost(price, hourly_rate, tax_rate)?,

        Command::Scenario { command } => run_scenario(command)?,

        Command::Sub { command } => run_sub(command)?,
    }

    Ok(())
}

fn run_loan(principal: f64, months: u32, rate: f64, frequency: &str) {
    let frequency = Frequency::normalize(frequency);
    let stats = calculate_loan(principal, months, rate, frequency);

    println!(
        "{} payment: ${:.2}",
        frequency.as_str().to_lowercase(),
        stats.payment
    );
    println!("Total interest: ${:.2}", stats.total_interest);
    println!("Total paid:     ${:.2}", stats.total_paid);
    println!("Interest/principal: {:.1}%", stats.ratio);
}

fn run_payoff(
    balance: f64,
    rate: f64,
    min_pct: f64,
    floor: f64,
    payment: Option<f64>,
    extra: f64,
) {
    let plan = CreditCardPlan {
        balance,
        interest_rate: rate,
        min_payment_pct: min_pct,
        min_payment_floor: floor,
        monthly_payment_override: payment,
        extra_payment: extra,
    };
    let result = calculate_credit_card_payoff(&plan);

    let years = result.months / 12;
    let months = result.months % 12;
    println!("Months to payoff: {} ({}y {}m)", result.months, years, months);
    println!("Total interest:   ${:.2}", result.total_interest_paid);
    println!("Total paid:       ${:.2}", result.total_paid);

    if !result.is_debt_free {
        println!("\nWarning: this plan never pays off the balance (50-year cap reached).");
        println!("Raise the payment above the monthly interest to make progress.");
    }
}

fn run_timecost(price: f64, hourly_rate: Option<f64>, tax_rate: Option<f64>) -> Result<()> {
    let profile = state::read_profile()?;

    let hourly_rate = hourly_rate.unwrap_or(profile.hourly_rate);
    if hourly_rate <= 0.0 {
        bail!("no hourly wage on file; run `truecost setup` or pass --hourly-rate");
    }
    let tax_rate = tax_rate.unwrap_or(profile.tax_rate);

    let result = calculate_time_cost(price, hourly_rate, tax_rate);
    let d = result.display;

    println!(
        "${:.2} costs you {:.1} hours of work (net ${:.2}/hr)",
        price, result.total_hours, result.net_hourly_rate
    );
    println!(
        "That is {} workday(s), {} hour(s), {} minute(s).",
        d.days, d.hours, d.minutes
    );

    Ok(())
}

fn run_scenario(command: ScenarioCommand) -> Result<()> {
    match command {
        ScenarioCommand::Add {
            name,
            principal,
            months,
            rate,
            frequency,
            currency,
            inactive,
        } => {
            let profile = state::read_profile()?;
            let mut scenarios = state::read_scenarios()?;

            let mut s = LoanScenario::new(
                state::next_id("scn", scenarios.iter().map(|s| s.id.as_str())),
                name,
                principal,
                currency.unwrap_or(profile.currency),
                months,
                rate,
                Frequency::normalize(&frequency),
                chrono::Utc::now(),
            );
            s.include_in_totals = !inactive;

            let stats = s.stats();
            println!("Saved {} ({})", s.name, s.id);
            println!(
                "{} payment: ${:.2} | total interest: ${:.2}",
                s.payment_frequency.as_str().to_lowercase(),
                stats.payment,
                stats.total_interest
            );

            scenarios.push(s);
            state::write_scenarios(&scenarios)?;
        }

        ScenarioCommand::List => {
            let scenarios = state::read_scenarios()?;
            if scenarios.is_empty() {
                println!("No scenarios saved. Add one with `truecost scenario add`.");
                return Ok(());
            }

            for s in &scenarios {
                let stats = s.stats();
                let flag = if s.include_in_totals { "" } else { " (inactive)" };
                println!(
                    "{} | {}{} | ${:.2}/{} | interest ${:.2}",
                    s.id,
                    s.name,
                    flag,
                    stats.payment,
                    s.payment_frequency.as_str().to_lowercase(),
                    stats.total_interest
                );
            }

            println!(
                "\nMonthly budget total (active): ${:.2}",
                scenario::monthly_total(&scenarios)
            );
        }

        ScenarioCommand::Show { id } => {
            let scenarios = state::read_scenarios()?;
            let Some(s) = scenarios.iter().find(|s| s.id == id) else {
                bail!("no scenario with id {id}");
            };

            let stats = s.stats();
            println!("{} ({})", s.name, s.id);
            println!("Created: {}", s.created_at.format("%Y-%m-%d"));
            println!(
                "Principal: {} {:.2} | term: {}mo | rate: {:.2}% | {}",
                s.currency,
                s.principal,
                s.term_months,
                s.fixed_annual_rate * 100.0,
                s.payment_frequency.as_str().to_lowercase()
            );
            println!(
                "{} payment: ${:.2}",
                s.payment_frequency.as_str().to_lowercase(),
                stats.payment
            );
            println!("Total interest: ${:.2}", stats.total_interest);
            println!("Total paid:     ${:.2}", stats.total_paid);
            println!("Monthly equivalent: ${:.2}", s.monthly_payment());
            println!(
                "Active in budget: {}",
                if s.include_in_totals { "yes" } else { "no" }
            );
        }

        ScenarioCommand::Rm { id } => {
            let mut scenarios = state::read_scenarios()?;
            let before = scenarios.len();
            scenarios.retain(|s| s.id != id);
            if scenarios.len() == before {
                bail!("no scenario with id {id}");
            }
            state::write_scenarios(&scenarios)?;
            println!("Deleted {id}");
        }

        ScenarioCommand::Summary => {
            let scenarios = state::read_scenarios()?;
            println!("{}", summarize_scenarios(&scenarios));
        }
    }

    Ok(())
}

fn run_sub(command: SubCommand) -> Result<()> {
    match command {
        SubCommand::Add { name, amount, cycle } => {
            let mut subs = state::read_subscriptions()?;

            let s = Subscription::new(
                state::next_id("sub", subs.iter().map(|s| s.id.as_str())),
                name,
                amount,
                BillingCycle::normalize(&cycle),
                chrono::Utc::now(),
            );
            println!(
                "Saved {} ({}) | {} ${:.2} | ${:.2}/month",
                s.name,
                s.id,
                s.billing_cycle.as_str(),
                s.amount,
                s.monthly_cost()
            );

            subs.push(s);
            state::write_subscriptions(&subs)?;
        }

        SubCommand::List => {
            let subs = state::read_subscriptions()?;
            if subs.is_empty() {
                println!("No subscriptions tracked. Add one with `truecost sub add`.");
                return Ok(());
            }

            for s in &subs {
                println!(
                    "{} | {} | {} ${:.2} | ${:.2}/month",
                    s.id,
                    s.name,
                    s.billing_cycle.as_str(),
                    s.amount,
                    s.monthly_cost()
                );
            }
            println!("\nMonthly total: ${:.2}", subscription::monthly_total(&subs));
        }

        SubCommand::Rm { id } => {
            let mut subs = state::read_subscriptions()?;
            let before = subs.len();
            subs.retain(|s| s.id != id);
            if subs.len() == before {
                bail!("no subscription with id {id}");
            }
            state::write_subscriptions(&subs)?;
            println!("Deleted {id}");
        }
    }

    Ok(())
}
