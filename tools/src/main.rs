//! score-runner: headless end-to-end pipeline runner.
//!
//! Usage:
//!   score-runner --identity ABCPE1234B
//!   score-runner --identity FXZPQ9821Z --account acc-042 --start 2024-01-01
//!   score-runner --identity ABCPE1234B --anomaly

use anyhow::{Context, Result};
use chrono::NaiveDate;
use creditsim_core::{
    features::FeatureAccumulator, profile::RiskProfile, scorer, simulator::StatementGenerator,
};
use std::collections::BTreeMap;
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let identity = parse_arg(&args, "--identity", "ABCPE1234B".to_string());
    let account_id = parse_arg(&args, "--account", "acc-000001".to_string());
    let start = parse_arg(&args, "--start", "2024-01-01".to_string());
    let anomaly = args.iter().any(|a| a == "--anomaly");

    let start_date = NaiveDate::parse_from_str(&start, "%Y-%m-%d")
        .with_context(|| format!("invalid --start date: {start}"))?;

    println!("creditsim — score-runner");
    println!("  identity: {identity}");
    println!("  account:  {account_id}");
    println!("  start:    {start_date}");
    println!("  profile:  {}", RiskProfile::resolve(&identity).name());
    println!();

    let statement = StatementGenerator::new(&identity, &account_id, start_date)?;

    // Single pass: count per nature for the summary while the
    // accumulator folds the same stream.
    let mut by_nature: BTreeMap<&'static str, u64> = BTreeMap::new();
    let mut accumulator = FeatureAccumulator::new();
    let mut total = 0u64;
    for txn in statement {
        *by_nature.entry(txn.nature().name()).or_insert(0) += 1;
        accumulator.accept(&txn);
        total += 1;
    }

    println!("transactions: {total}");
    for (nature, count) in &by_nature {
        println!("  {nature:<15} {count}");
    }

    let features = accumulator.finish().with_anomaly(anomaly);
    log::info!("feature vector finalized for {identity}");

    println!();
    println!("features: {}", serde_json::to_string_pretty(&features)?);
    println!("score:    {}", scorer::score(&features));

    Ok(())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
