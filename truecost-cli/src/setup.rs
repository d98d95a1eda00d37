use anyhow::Result;
use std::io::{self, Write};
use truecost_core::DEFAULT_TAX_RATE;

use crate::state::{Profile, profile_path, write_profile};

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

fn prompt_f64(label: &str, default: f64) -> Result<f64> {
    let raw = prompt(label)?;
    if raw.is_empty() {
        return Ok(default);
    }
    Ok(raw.parse().unwrap_or(default))
}

pub fn run_setup() -> Result<()> {
    println!("truecost setup\n");

    let hourly_rate = prompt_f64("Gross hourly wage", 0.0)?;
    let tax_rate = prompt_f64(
        &format!("Tax rate as a decimal (default {DEFAULT_TAX_RATE})"),
        DEFAULT_TAX_RATE,
    )?;
    let currency = {
        let c = prompt("Currency code (default CAD)")?;
        if c.is_empty() { "CAD".to_string() } else { c.to_uppercase() }
    };

    let profile = Profile {
        created_at_utc: Some(chrono::Utc::now().to_rfc3339()),
        hourly_rate,
        tax_rate,
        currency,
    };
    write_profile(&profile)?;

    println!("\nWrote:");
    println!("- {}", profile_path()?.display());

    println!("\nNext recommended steps:");
    println!("- truecost timecost 120            (what $120 costs you in work hours)");
    println!("- truecost loan --principal 20000 --months 60 --rate 0.06");
    println!("- truecost scenario add --name \"Car loan\" --principal 20000 --months 60 --rate 0.06");

    Ok(())
}
