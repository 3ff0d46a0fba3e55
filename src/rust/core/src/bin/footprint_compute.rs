// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! footprint_compute: CLI binary for one footprint evaluation
//!
//! Takes the questionnaire JSON on stdin or as --json argument, runs the
//! FootprintKernel and prints the response JSON on stdout. Logs go to stderr
//! (`RUST_LOG=debug` for per-report detail).
//!
//! Usage:
//!   echo '{"travel":{...},"home":{...},"lifestyle":{...}}' | footprint_compute
//!   footprint_compute --json '{"travel":{...},...}'
//!   footprint_compute --remote --json '...'      # backend model first, local on failure
//!   footprint_compute --factors factors.json      # override the emission factor table
//!   footprint_compute --impact --json '[{"t":null,"kg":320.5}, ...]'
//!
//! Environment: CARBON_API_BASE, CARBON_API_TIMEOUT_SECS, CARBON_FACTORS_PATH.

use std::env;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use carbon_core::api::{ApiClient, Session};
use carbon_core::science::impact::HistoryPoint;
use carbon_core::{Config, EmissionFactors, FallbackEstimator, FootprintInput, FootprintKernel, ImpactEngine};

struct Args {
    json: Option<String>,
    factors: Option<String>,
    remote: bool,
    impact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = parse_args()?;
    let config = Config::load()?;

    let factors = match &args.factors {
        Some(path) => EmissionFactors::load(path)?,
        None => config.factors()?,
    };

    let input = get_input(&args)?;

    if args.impact {
        let history: Vec<HistoryPoint> =
            serde_json::from_str(&input).context("Invalid history JSON")?;
        let summary = ImpactEngine::summarize(&history, &factors);
        println!("{}", serde_json::to_string(&summary)?);
        return Ok(());
    }

    let footprint = FootprintInput::from_json(&input).context("Invalid input JSON")?;

    let output = if args.remote {
        info!("Requesting remote prediction from {}", config.api_base);
        let client = ApiClient::from_config(&config, Session::in_memory())?;
        let estimator = FallbackEstimator::new(client, factors);
        serde_json::to_value(estimator.analyze(&footprint).await?)?
    } else {
        serde_json::to_value(FootprintKernel::analyze(&footprint, &factors)?)?
    };

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        json: None,
        factors: None,
        remote: false,
        impact: false,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = Some(iter.next().context("--json needs a value")?),
            "--factors" => args.factors = Some(iter.next().context("--factors needs a path")?),
            "--remote" => args.remote = true,
            "--impact" => args.impact = true,
            other => bail!("Unknown argument: {}", other),
        }
    }
    Ok(args)
}

fn get_input(args: &Args) -> Result<String> {
    if let Some(json) = &args.json {
        return Ok(json.clone());
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}
