//! Full Assessment Report Example
//!
//! Demonstrates:
//! - Running the pipeline with a regression baseline and a classifier
//! - Loading a trained linear model from a JSON artifact
//! - Producing a human-readable report from an assessment
//!
//! Run with: cargo run --example 02_full_report

use airindex_core::{AqiModel, AqiPipeline, Assessment, Pollutant, PollutantReadings};
use airindex_ml::{LinearModel, MaxIndexModel, ThresholdClassifier};

fn print_report(site: &str, assessment: &Assessment) {
    println!("{site}:");
    for pollutant in Pollutant::ALL {
        println!(
            "  {:>4} sub-index: {:7.2}",
            pollutant.name(),
            assessment.sub_indices.get(pollutant)
        );
    }
    match assessment.index() {
        Some(aqi) => println!("  AQI estimate: {aqi:.1}"),
        None => println!("  AQI estimate: (classifier, no numeric index)"),
    }
    println!("  category: {}", assessment.category);
    println!("  advisory: {}\n", assessment.category.advisory());
}

fn run_model<M: AqiModel>(model: M, readings: &PollutantReadings) {
    println!("--- model: {} ---", model.name());
    let pipeline = AqiPipeline::new(model);
    match pipeline.assess(readings) {
        Ok(assessment) => print_report("city station", &assessment),
        Err(err) => println!("assessment failed: {err}\n"),
    }
}

fn main() {
    println!("airindex Full Report Example\n");

    let readings = PollutantReadings::new(32.0, 58.0, 144.0, 236.0);

    run_model(MaxIndexModel::new(), &readings);
    run_model(ThresholdClassifier::new(), &readings);

    // A fitted artifact would normally come from disk via
    // LinearModel::from_path; inline JSON keeps the example
    // self-contained.
    let artifact = r#"{
        "version": 1,
        "weights": [0.05, 0.10, 0.70, 0.15],
        "intercept": 4.0
    }"#;
    match LinearModel::from_json(artifact) {
        Ok(model) => run_model(model, &readings),
        Err(err) => println!("artifact rejected: {err}"),
    }
}
