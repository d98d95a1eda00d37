use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use truecost_core::{DEFAULT_TAX_RATE, LoanScenario, Subscription};

pub fn truecost_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".truecost"))
}

pub fn ensure_truecost_home() -> Result<PathBuf> {
    let dir = truecost_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Income profile captured during setup; supplies defaults for the
/// timecost command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub created_at_utc: Option<String>,
    /// Gross hourly wage; 0.0 means "not set yet"
    pub hourly_rate: f64,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_tax_rate() -> f64 {
    DEFAULT_TAX_RATE
}

fn default_currency() -> String {
    "CAD".to_string()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            created_at_utc: None,
            hourly_rate: 0.0,
            tax_rate: DEFAULT_TAX_RATE,
            currency: "CAD".to_string(),
        }
    }
}

pub fn profile_path() -> Result<PathBuf> {
    Ok(ensure_truecost_home()?.join("profile.json"))
}

pub fn write_profile(profile: &Profile) -> Result<()> {
    let p = profile_path()?;
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn read_profile() -> Result<Profile> {
    let p = profile_path()?;
    if !p.exists() {
        return Ok(Profile::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(serde_json::from_str(&s)?)
}

pub fn scenarios_path() -> Result<PathBuf> {
    Ok(ensure_truecost_home()?.join("scenarios.json"))
}

pub fn read_scenarios() -> Result<Vec<LoanScenario>> {
    let p = scenarios_path()?;
    if !p.exists() {
        return Ok(Vec::new());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(serde_json::from_str(&s)?)
}

pub fn write_scenarios(scenarios: &[LoanScenario]) -> Result<()> {
    let p = scenarios_path()?;
    let json = serde_json::to_string_pretty(scenarios)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn subscriptions_path() -> Result<PathBuf> {
    Ok(ensure_truecost_home()?.join("subscriptions.json"))
}

pub fn read_subscriptions() -> Result<Vec<Subscription>> {
    let p = subscriptions_path()?;
    if !p.exists() {
        return Ok(Vec::new());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(serde_json::from_str(&s)?)
}

pub fn write_subscriptions(subscriptions: &[Subscription]) -> Result<()> {
    let p = subscriptions_path()?;
    let json = serde_json::to_string_pretty(subscriptions)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Next sequential id with a short prefix ("scn-001", "sub-004").
/// Derived from the highest existing suffix so deletions never cause
/// a collision.
pub fn next_id<'a>(prefix: &str, existing: impl Iterator<Item = &'a str>) -> String {
    let max = existing
        .filter_map(|id| id.strip_prefix(prefix)?.strip_prefix('-')?.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{}-{:03}", prefix, max + 1)
}
