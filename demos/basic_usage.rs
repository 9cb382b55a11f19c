// ============================================================================
// Basic Usage Example
// ============================================================================

use rounded_distribution::prelude::*;
use std::collections::BTreeMap;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Rounded Distribution Example ===\n");

    let weights: BTreeMap<&str, i64> = [
        ("alpha", 146),
        ("beta", 123),
        ("gamma", 323),
        ("delta", 982),
        ("epsilon", 457),
    ]
    .into_iter()
    .collect();

    // Whole percents
    println!("Whole percents:");
    match integer_percents(&weights) {
        Ok(percents) => {
            let mut percents: Vec<_> = percents.into_iter().collect();
            percents.sort();
            for (key, percent) in &percents {
                println!("  {:<8} {:>3}%", key, percent);
            }
        },
        Err(e) => eprintln!("  failed: {}", e),
    }

    // One decimal place, exact decimals
    println!("\nOne decimal place:");
    let distributor = RoundedDistributor::new(DistributionConfig::percent(1));
    match distributor.allocate(&weights) {
        Ok(distribution) => {
            for (key, value) in distribution.decimals(true) {
                println!("  {:<8} {:>5}%", key, value);
            }
            println!("  total units: {}", distribution.total_units());
        },
        Err(e) => eprintln!("  failed: {}", e),
    }

    // A share too small to round up on its own still gets one unit
    println!("\n=== Zero-Share Rescue ===");
    match distribute_list(&[1000i64, 1000, 1000, 1000, 5], 0, true) {
        Ok(percents) => println!("  {:?}", percents),
        Err(e) => eprintln!("  failed: {}", e),
    }

    // More keys than units: the log reports what could not be rescued
    println!("\n=== More Keys Than Units ===");
    let crowded = RoundedDistributor::new(DistributionConfig::percent(0).with_max_elements(1000));
    match crowded.allocate(&vec![1i64; 150]) {
        Ok(distribution) => {
            let nonzero = distribution.iter_units().filter(|&(_, u)| u > 0).count();
            println!("  {} of {} keys received a unit", nonzero, distribution.len());
        },
        Err(e) => eprintln!("  failed: {}", e),
    }

    // Validation errors
    println!("\n=== Rejected Inputs ===");
    for result in [
        distribute_list(&[3i64, -1], 0, true),
        distribute_list(&[1.0f64, f64::NAN], 0, true),
        distribute_list(&[1i64; 6], 0, true),
        distribute_list(&[1i64], 13, true),
    ] {
        if let Err(e) = result {
            println!("  {}", e);
        }
    }
}
