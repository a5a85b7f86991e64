//! Sub-Index Computation Example
//!
//! Demonstrates:
//! - Scoring raw pollutant readings against the breakpoint scales
//! - Assembling the sub-index quadruple and finding the dominant pollutant
//! - Classifying an index value into a severity category
//! - How invalid readings are rejected
//!
//! Run with: cargo run --example 01_sub_indices

use airindex_core::{AqiCategory, Pollutant, PollutantReadings, SubIndices};

fn main() {
    println!("airindex Sub-Index Example\n");

    // Station readings in µg/m³: SO2, NO2, RSPM, SPM
    let stations = [
        ("residential", PollutantReadings::new(8.0, 14.0, 22.0, 41.0)),
        ("arterial road", PollutantReadings::new(20.0, 30.0, 40.0, 60.0)),
        ("industrial belt", PollutantReadings::new(95.0, 188.0, 210.0, 480.0)),
    ];

    println!("=== Per-Station Assessment ===\n");
    for (site, readings) in &stations {
        match SubIndices::compute(readings) {
            Ok(indices) => {
                let (worst, value) = indices.dominant();
                let category = AqiCategory::from_index(value);
                println!("{site}:");
                for pollutant in Pollutant::ALL {
                    println!(
                        "  {:>4}: {:7.2} {} -> sub-index {:7.2}",
                        pollutant.name(),
                        readings.get(pollutant),
                        pollutant.unit(),
                        indices.get(pollutant),
                    );
                }
                println!("  worst pollutant: {worst} at {value:.2} -> {category}");
                println!("  advisory: {}\n", category.advisory());
            }
            Err(err) => println!("{site}: cannot assess - {err}\n"),
        }
    }

    println!("=== Invalid Readings ===\n");
    let broken = PollutantReadings::new(20.0, -4.0, 40.0, 60.0);
    match SubIndices::compute(&broken) {
        Ok(_) => println!("unexpected: negative reading was accepted"),
        Err(err) => println!("rejected as expected: {err}"),
    }
}
