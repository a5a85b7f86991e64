//! End-to-end pipeline tests across model flavours
//!
//! Drives the full path from raw readings to severity verdicts with
//! every bundled model, including artifact loading from disk.

use std::fs;
use std::io::Write;

use airindex_core::{
    AqiCategory, AqiError, AqiPipeline, Pollutant, PollutantReadings, Prediction,
};
use airindex_ml::{LinearModel, MaxIndexModel, ThresholdClassifier};

/// Reference quadruple: SOi 25, NOi 37.5, RPi 66.67, SPMi 60.
const REFERENCE: PollutantReadings = PollutantReadings::new(20.0, 30.0, 40.0, 60.0);

#[test]
fn baseline_regressor_full_path() {
    let pipeline = AqiPipeline::new(MaxIndexModel::new());
    let assessment = pipeline.assess(&REFERENCE).unwrap();

    assert_eq!(assessment.sub_indices.so2, 25.0);
    assert_eq!(assessment.sub_indices.no2, 37.5);
    assert!((assessment.sub_indices.rspm - 66.666_666_666_666_67).abs() < 1e-9);
    assert_eq!(assessment.sub_indices.spm, 60.0);

    // RSPM dominates the quadruple
    let aqi = assessment.index().unwrap();
    assert!((aqi - 66.666_666_666_666_67).abs() < 1e-9);
    assert_eq!(assessment.category, AqiCategory::Moderate);
    assert_eq!(assessment.sub_indices.dominant().0, Pollutant::Rspm);
}

#[test]
fn baseline_classifier_full_path() {
    let pipeline = AqiPipeline::new(ThresholdClassifier::new());
    let assessment = pipeline.assess(&REFERENCE).unwrap();

    assert_eq!(assessment.prediction, Prediction::Category(AqiCategory::Moderate));
    assert_eq!(assessment.category, AqiCategory::Moderate);
    assert_eq!(assessment.index(), None);
}

#[test]
fn severe_pollution_reaches_top_bands() {
    let pipeline = AqiPipeline::new(MaxIndexModel::new());
    let smog = PollutantReadings::new(95.0, 188.0, 310.0, 480.0);
    let assessment = pipeline.assess(&smog).unwrap();

    // RSPM at 310: 400 + 60 * 100/130
    let expected = 400.0 + 60.0 * 100.0 / 130.0;
    let aqi = assessment.index().unwrap();
    assert!((aqi - expected).abs() < 1e-9);
    assert_eq!(assessment.category, AqiCategory::Hazardous);
}

#[test]
fn linear_artifact_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aqi_linear.json");
    let mut file = fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{"version": 1, "weights": [0.0, 0.0, 1.0, 0.0], "intercept": 0.0}}"#
    )
    .unwrap();

    let model = LinearModel::from_path(&path).unwrap();
    let pipeline = AqiPipeline::new(model);
    let assessment = pipeline.assess(&REFERENCE).unwrap();

    // Weights pick out the RSPM sub-index alone
    let aqi = assessment.index().unwrap();
    assert!((aqi - 66.666_666_666_666_67).abs() < 1e-9);
}

#[test]
fn missing_artifact_reports_model_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.json");

    let err = LinearModel::from_path(&path).unwrap_err();
    assert_eq!(
        err,
        AqiError::ModelUnavailable {
            reason: "model artifact not readable",
        }
    );
}

#[test]
fn invalid_readings_fail_before_any_model_runs() {
    let bad = PollutantReadings::new(20.0, 30.0, 40.0, -1.0);

    let err = AqiPipeline::new(MaxIndexModel::new())
        .assess(&bad)
        .unwrap_err();
    assert_eq!(
        err,
        AqiError::InvalidReading {
            pollutant: Pollutant::Spm,
            value: -1.0,
        }
    );

    let err = AqiPipeline::new(ThresholdClassifier::new())
        .assess(&bad)
        .unwrap_err();
    assert_eq!(
        err,
        AqiError::InvalidReading {
            pollutant: Pollutant::Spm,
            value: -1.0,
        }
    );
}

#[test]
fn pipelines_are_independent() {
    // Two pipelines with different models, no shared state
    let regressor = AqiPipeline::new(MaxIndexModel::new());
    let classifier = AqiPipeline::new(ThresholdClassifier::new());

    let a = regressor.assess(&REFERENCE).unwrap();
    let b = classifier.assess(&REFERENCE).unwrap();

    assert_eq!(a.sub_indices, b.sub_indices);
    assert_eq!(a.category, b.category);
    assert_ne!(a.prediction, b.prediction);
}
