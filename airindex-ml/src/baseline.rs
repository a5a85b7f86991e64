//! Deterministic baseline models
//!
//! These need no training artifacts and run anywhere the core crate
//! runs. They implement the conventional aggregation rule (the index is
//! the worst sub-index), which makes them useful as a reference when
//! judging whether a trained model is earning its keep, and as a
//! fallback when no artifact is deployed.

use airindex_core::{AqiCategory, AqiModel, AqiResult, FeatureVector, Prediction};

/// Regressor reporting the worst sub-index as the AQI.
///
/// This is the textbook aggregation: the overall index is driven by
/// whichever pollutant scores highest.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxIndexModel;

impl MaxIndexModel {
    /// Build the baseline regressor.
    pub const fn new() -> Self {
        Self
    }
}

impl AqiModel for MaxIndexModel {
    fn predict(&self, features: &FeatureVector) -> AqiResult<Prediction> {
        let worst = features
            .as_slice()
            .iter()
            .fold(0.0f64, |acc, value| acc.max(*value));
        Ok(Prediction::Index(worst))
    }

    fn name(&self) -> &'static str {
        "max-sub-index"
    }
}

/// Classifier reporting the severity band of the worst sub-index.
///
/// Same aggregation as [`MaxIndexModel`] but emits the label instead of
/// the number, exercising the classifier path of the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdClassifier;

impl ThresholdClassifier {
    /// Build the baseline classifier.
    pub const fn new() -> Self {
        Self
    }
}

impl AqiModel for ThresholdClassifier {
    fn predict(&self, features: &FeatureVector) -> AqiResult<Prediction> {
        let worst = features
            .as_slice()
            .iter()
            .fold(0.0f64, |acc, value| acc.max(*value));
        Ok(Prediction::Category(AqiCategory::from_index(worst)))
    }

    fn name(&self) -> &'static str {
        "threshold-classifier"
    }
}
