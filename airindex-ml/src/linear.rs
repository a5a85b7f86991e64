//! Linear regression model with JSON artifacts
//!
//! Training happens offline; what ships is a small artifact holding the
//! fitted weights and intercept. [`LinearModel`] evaluates the fit over
//! the canonical feature layout, and with `std` enabled can load
//! artifacts from JSON text or straight from disk.
//!
//! ## Artifact Format
//!
//! ```json
//! {
//!     "version": 1,
//!     "weights": [0.09, 0.12, 0.61, 0.18],
//!     "intercept": 2.5
//! }
//! ```
//!
//! `weights` follow the canonical pollutant order (SO2, NO2, RSPM, SPM)
//! and must contain exactly one weight per feature. The version field
//! leaves room for future artifact evolution; only version 1 exists.

use airindex_core::{AqiError, AqiModel, AqiResult, FeatureVector, Prediction};

#[cfg(feature = "std")]
use std::path::Path;

/// Artifact format revision this build understands.
pub const ARTIFACT_VERSION: u32 = 1;

/// Linear fit over the sub-index features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    weights: [f64; FeatureVector::LEN],
    intercept: f64,
}

impl LinearModel {
    /// Build a model from already-validated parameters.
    ///
    /// Fails with [`AqiError::ModelUnavailable`] if any parameter is
    /// non-finite; such a model could never produce a usable index.
    pub fn new(weights: [f64; FeatureVector::LEN], intercept: f64) -> AqiResult<Self> {
        let finite = intercept.is_finite() && weights.iter().all(|w| w.is_finite());
        if !finite {
            return Err(AqiError::ModelUnavailable {
                reason: "model parameters are not finite",
            });
        }
        Ok(Self { weights, intercept })
    }

    /// Fitted feature weights, in canonical pollutant order.
    pub const fn weights(&self) -> &[f64; FeatureVector::LEN] {
        &self.weights
    }

    /// Fitted intercept.
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Parse a model from JSON artifact text.
    #[cfg(feature = "std")]
    pub fn from_json(text: &str) -> AqiResult<Self> {
        let artifact: ModelArtifact = serde_json::from_str(text).map_err(|err| {
            log::warn!("rejecting model artifact: {err}");
            AqiError::ModelUnavailable {
                reason: "malformed model artifact",
            }
        })?;

        if artifact.version != ARTIFACT_VERSION {
            return Err(AqiError::ModelUnavailable {
                reason: "unsupported artifact version",
            });
        }

        Self::new(artifact.weights, artifact.intercept)
    }

    /// Load a model artifact from disk.
    #[cfg(feature = "std")]
    pub fn from_path<P: AsRef<Path>>(path: P) -> AqiResult<Self> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|err| {
            log::warn!(
                "cannot read model artifact {}: {err}",
                path.as_ref().display()
            );
            AqiError::ModelUnavailable {
                reason: "model artifact not readable",
            }
        })?;
        Self::from_json(&text)
    }

    /// Export the model as a version-1 JSON artifact.
    #[cfg(feature = "std")]
    pub fn to_json(&self) -> AqiResult<String> {
        let artifact = ModelArtifact {
            version: ARTIFACT_VERSION,
            weights: self.weights,
            intercept: self.intercept,
        };
        serde_json::to_string(&artifact).map_err(|_| AqiError::ModelUnavailable {
            reason: "artifact serialization failed",
        })
    }
}

impl AqiModel for LinearModel {
    fn predict(&self, features: &FeatureVector) -> AqiResult<Prediction> {
        let mut aqi = self.intercept;
        for (weight, feature) in self.weights.iter().zip(features.as_slice()) {
            aqi += weight * feature;
        }
        Ok(Prediction::Index(aqi))
    }

    fn name(&self) -> &'static str {
        "linear-regression"
    }
}

/// On-disk artifact layout.
#[cfg(feature = "std")]
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct ModelArtifact {
    version: u32,
    weights: [f64; FeatureVector::LEN],
    intercept: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_the_fit() {
        let model = LinearModel::new([0.25, 0.25, 0.25, 0.25], 10.0).unwrap();
        let features = FeatureVector::assemble(&airindex_core::SubIndices {
            so2: 100.0,
            no2: 200.0,
            rspm: 300.0,
            spm: 400.0,
        });
        let prediction = model.predict(&features).unwrap();
        assert_eq!(prediction, Prediction::Index(260.0));
    }

    #[test]
    fn rejects_non_finite_parameters() {
        let err = LinearModel::new([1.0, f64::NAN, 1.0, 1.0], 0.0).unwrap_err();
        assert!(matches!(err, AqiError::ModelUnavailable { .. }));

        let err = LinearModel::new([1.0; 4], f64::INFINITY).unwrap_err();
        assert!(matches!(err, AqiError::ModelUnavailable { .. }));
    }

    #[cfg(feature = "std")]
    #[test]
    fn parses_version_1_artifacts() {
        let text = r#"{"version": 1, "weights": [0.1, 0.2, 0.3, 0.4], "intercept": 5.0}"#;
        let model = LinearModel::from_json(text).unwrap();
        assert_eq!(model.weights(), &[0.1, 0.2, 0.3, 0.4]);
        assert_eq!(model.intercept(), 5.0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn rejects_bad_artifacts() {
        // Truncated JSON
        let err = LinearModel::from_json("{\"version\": 1").unwrap_err();
        assert_eq!(
            err,
            AqiError::ModelUnavailable {
                reason: "malformed model artifact",
            }
        );

        // Wrong weight count
        let err = LinearModel::from_json(
            r#"{"version": 1, "weights": [1.0, 2.0], "intercept": 0.0}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            AqiError::ModelUnavailable {
                reason: "malformed model artifact",
            }
        );

        // Future version
        let err = LinearModel::from_json(
            r#"{"version": 7, "weights": [1.0, 1.0, 1.0, 1.0], "intercept": 0.0}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            AqiError::ModelUnavailable {
                reason: "unsupported artifact version",
            }
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn artifacts_round_trip() {
        let model = LinearModel::new([0.09, 0.12, 0.61, 0.18], 2.5).unwrap();
        let text = model.to_json().unwrap();
        let reloaded = LinearModel::from_json(&text).unwrap();
        assert_eq!(reloaded, model);
    }
}
