//! End-to-end assessment pipeline
//!
//! Wires the stages of one assessment together:
//!
//! ```text
//! readings --> breakpoint scales --> sub-indices --> feature vector
//!                                                         |
//!                                                       model
//!                                                         |
//!                              severity category <-- prediction
//! ```
//!
//! The pipeline owns its model and no global state, so independent
//! pipelines with different models coexist freely. Every stage before
//! the model is a pure function over immutable tables; a pipeline can
//! be shared across threads whenever its model can. Any stage failure
//! aborts the assessment with the stage's error; partial results are
//! never returned.

use crate::{
    category::AqiCategory,
    errors::{AqiError, AqiResult},
    features::{FeatureVector, SubIndices},
    model::{AqiModel, Prediction},
    pollutant::PollutantReadings,
};

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Complete result of one assessment.
///
/// Carries the intermediate sub-indices alongside the model's verdict so
/// callers can report which pollutant drove the outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assessment {
    /// Per-pollutant sub-indices fed to the model
    pub sub_indices: SubIndices,
    /// The model's raw prediction
    pub prediction: Prediction,
    /// Severity band: derived from the index for regressors, returned
    /// directly by classifiers
    pub category: AqiCategory,
}

impl Assessment {
    /// Numeric index estimate, when the model was a regressor.
    pub const fn index(&self) -> Option<f64> {
        self.prediction.index()
    }
}

/// Assessment pipeline bound to one model.
pub struct AqiPipeline<M> {
    model: M,
}

impl<M: AqiModel> AqiPipeline<M> {
    /// Build a pipeline around a ready model.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// The model this pipeline runs.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Tear down the pipeline and recover the model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Assess one set of readings.
    ///
    /// Computes sub-indices, assembles the feature vector, runs the
    /// model, and resolves the severity category. Numeric predictions
    /// must be finite; a model emitting NaN or infinity is reported as
    /// [`AqiError::InferenceFailed`] rather than classified.
    pub fn assess(&self, readings: &PollutantReadings) -> AqiResult<Assessment> {
        let sub_indices = SubIndices::compute(readings)?;
        let features = FeatureVector::assemble(&sub_indices);
        let prediction = self.model.predict(&features)?;

        let category = match prediction {
            Prediction::Index(aqi) => {
                if !aqi.is_finite() {
                    log_warn!("{} produced a non-finite index", self.model.name());
                    return Err(AqiError::InferenceFailed {
                        reason: "model produced a non-finite index",
                    });
                }
                AqiCategory::from_index(aqi)
            }
            Prediction::Category(category) => category,
        };

        Ok(Assessment {
            sub_indices,
            prediction,
            category,
        })
    }
}
