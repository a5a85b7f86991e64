//! Trait seam for pre-trained predictive models
//!
//! The pipeline is model-agnostic: anything implementing [`AqiModel`] can
//! be plugged in, from the bundled baselines to adapters around exported
//! artifacts. Models come in two shapes, distinguished by what they were
//! trained to emit: regressors estimate the numeric index, classifiers
//! return the severity label directly. [`Prediction`] keeps the two
//! distinguishable all the way to the caller.

use crate::{category::AqiCategory, errors::AqiResult, features::FeatureVector};

/// Output of one model inference.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prediction {
    /// Numeric index estimate from a regression model.
    Index(f64),
    /// Severity label from a classification model.
    Category(AqiCategory),
}

impl Prediction {
    /// Numeric estimate, if this came from a regressor.
    pub const fn index(&self) -> Option<f64> {
        match self {
            Prediction::Index(value) => Some(*value),
            Prediction::Category(_) => None,
        }
    }

    /// Severity label, if this came from a classifier.
    pub const fn category(&self) -> Option<AqiCategory> {
        match self {
            Prediction::Index(_) => None,
            Prediction::Category(category) => Some(*category),
        }
    }
}

/// A pre-trained model mapping feature vectors to predictions.
///
/// Implementations own their parameters and loading lifecycle; the
/// pipeline takes the model by value and never reaches for global state,
/// so two pipelines can run different models side by side.
pub trait AqiModel {
    /// Run inference over one feature vector.
    ///
    /// Returns [`ModelUnavailable`](crate::AqiError::ModelUnavailable) if
    /// the model cannot serve predictions at all, and
    /// [`InferenceFailed`](crate::AqiError::InferenceFailed) if this
    /// particular prediction went wrong.
    fn predict(&self, features: &FeatureVector) -> AqiResult<Prediction>;

    /// Short model name for diagnostics.
    fn name(&self) -> &'static str;
}
