//! bakery-forge: headless batch runner for the synthetic bakery dataset.
//!
//! Usage:
//!   bakery-forge --seed 42 --rows 1500 --out-dir ./out
//!   bakery-forge --config forge.json --data-dir ./data --no-open
//!   bakery-forge --seed 7 --no-report

use anyhow::Result;
use bakery_core::{
    config::ForgeConfig,
    engine::{ForgeEngine, ForgeOutput, RunArtifacts},
};
use std::env;
use std::path::PathBuf;

const DOMAIN_FILE: &str = "bakery_domains.json";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = match flag_value(&args, "--config") {
        Some(path) => ForgeConfig::load(path)?,
        None => ForgeConfig::default(),
    };
    config.seed = parse_arg(&args, "--seed", config.seed);
    config.rows = parse_arg(&args, "--rows", config.rows);
    if let Some(dir) = flag_value(&args, "--out-dir") {
        config.output_dir = PathBuf::from(dir);
    }
    if let Some(dir) = flag_value(&args, "--data-dir") {
        config.domain_file = Some(PathBuf::from(dir).join(DOMAIN_FILE));
    }
    if has_flag(&args, "--no-report") {
        config.write_report = false;
    }
    if has_flag(&args, "--no-open") {
        config.open_report = false;
    }

    println!("Bakery dataset forge");
    println!("  seed:      {}", config.seed);
    println!("  rows:      {}", config.rows);
    println!("  out_dir:   {}", config.output_dir.display());
    if let Some(domain_file) = &config.domain_file {
        println!("  domains:   {}", domain_file.display());
    }
    println!();

    let engine = ForgeEngine::build(config)?;
    let (output, artifacts) = engine.run()?;
    print_summary(&engine, &output, &artifacts);
    Ok(())
}

fn print_summary(engine: &ForgeEngine, output: &ForgeOutput, artifacts: &RunArtifacts) {
    println!("=== RUN SUMMARY ===");
    println!("  seed:           {}", engine.config.seed);
    println!("  rows generated: {}", output.rows_before());
    println!("  rows exported:  {}", output.rows_after());
    println!("  spreadsheet:    {}", artifacts.exports.spreadsheet.display());
    println!("  delimited:      {}", artifacts.exports.delimited.display());
    println!("  corruption log: {}", artifacts.corruption_log.display());
    match &artifacts.report {
        Some(path) => println!("  report:         {}", path.display()),
        None => println!("  report:         (skipped)"),
    }

    println!();
    println!("=== INJECTED DEFECTS ===");
    for event in &output.events {
        println!("  {:<18} {:>4} mutations", event.pass_name(), event.mutation_count());
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    flag_value(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
