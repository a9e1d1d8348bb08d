//! Arm torque ranking.
//!
//! Runs the exhaustive arm search and prints the lowest- and highest-torque
//! configurations, the percent difference between them, and the first
//! configuration with equal segment lengths if there is one.
//!
//! # Usage
//!
//! ```text
//! arm-rank                         # 3 segments, 72 in total, 12 in minimum
//! arm-rank --segments 2 --total-length 60
//! arm-rank --verbose               # log search progress
//! ```

use anyhow::{Context, Result};
use arm_search::ArmSearch;
use arm_types::{Arm, Massive, SearchConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Rank every integer-length arm configuration by base torque.
#[derive(Parser, Debug)]
#[command(name = "arm-rank")]
#[command(about = "Find the torque-minimizing and torque-maximizing arm designs", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of structural segments per arm
    #[arg(long, default_value_t = 3)]
    segments: usize,

    /// Sum of all segment lengths in inches, excluding the end effector
    #[arg(long, default_value_t = 72)]
    total_length: u32,

    /// Minimum length of a single segment in inches
    #[arg(long, default_value_t = 12)]
    min_length: u32,

    /// Log search progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .compact()
        .init();

    let config = SearchConfig::default()
        .with_segments(cli.segments)
        .with_total_length(cli.total_length)
        .with_min_length(cli.min_length);
    config.validate().context("invalid search parameters")?;

    let report = ArmSearch::new(config).run();

    let (Some(best), Some(worst)) = (report.best(), report.worst()) else {
        println!(
            "No arm splits {} in into {} distinct segments of at least {} in",
            cli.total_length, cli.segments, cli.min_length
        );
        return Ok(());
    };

    println!(
        "Searched {} arms from {} partitions",
        report.len(),
        report.partition_count()
    );
    println!();
    print_arm("Best arm", best);
    println!();
    print_arm("Worst arm", worst);
    println!();
    if let Some(diff) = report.percent_difference() {
        println!("Torque difference: {diff:.2}%");
    }
    println!();
    match report.symmetric() {
        Some(arm) => print_arm("Symmetric arm", arm),
        None => println!("No symmetric configuration found"),
    }

    Ok(())
}

fn print_arm(title: &str, arm: &Arm) {
    let lengths: Vec<String> = arm
        .segment_lengths()
        .iter()
        .map(|l| format!("{l:.0}"))
        .collect();

    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!("  Segments:       [{}] in", lengths.join(", "));
    println!("  Mass:           {:.3} lb", arm.mass());
    println!("  Length:         {:.1} in", arm.length());
    println!("  Center of mass: {:.3} in", arm.center_of_mass());
    println!("  Base torque:    {:.3} lb·in", arm.torque_at_base());
    for (i, component) in arm.components().iter().enumerate() {
        println!(
            "    {i}: {:<12} mass {:>7.3} lb  length {:>5.1} in  com {:>6.3} in",
            component.kind(),
            component.mass(),
            component.length(),
            component.center_of_mass()
        );
    }
}
