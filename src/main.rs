use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use helmcast_core::Config;
use helmcast_planner::{PlanRequest, SailPlanner};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    helmcast_core::init()?;

    let config = Config::from_env();
    let validation = config.validate();
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    if !validation.is_valid() {
        bail!("Invalid configuration: {}", validation.error_summary());
    }

    println!("Helmcast - Sail-Plan Advice for Tomorrow's Wind");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let request = PlanRequest {
        city: prompt_field(&mut lines, "City")?,
        region: prompt_field(&mut lines, "Region/state")?,
        country: prompt_field(&mut lines, "Country")?,
        vessel_model: prompt_field(&mut lines, "Boat model")?,
        available_sails: prompt_field(&mut lines, "Available sails")?,
    };

    let mut planner = SailPlanner::new(config)?;

    println!();
    println!("Checking tomorrow's wind...");
    println!();

    match planner.run(&request).await {
        Ok(plan) => {
            println!("Sail plan for {} on {}:", plan.location, plan.target_date);
            println!();
            println!("{}", plan.advice);
        }
        Err(error) => {
            tracing::error!(error = %error, "Planning run failed");
            eprintln!("{}", error.user_message());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn prompt_field(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().context("failed to flush stdout")?;

    let line = lines
        .next()
        .context("input ended before all fields were provided")??;

    Ok(line.trim().to_string())
}
