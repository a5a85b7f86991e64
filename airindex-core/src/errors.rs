//! Error types for index computation and model inference
//!
//! ## Design Philosophy
//!
//! Errors are small `Copy` enums with no heap allocation, so they work
//! unchanged in `no_std` deployments and cost nothing to pass around.
//! Dynamic context (the offending reading, the pollutant it belonged to)
//! rides in the variant itself; free-form detail is limited to `&'static
//! str` reasons supplied by model adapters.
//!
//! ## Error Categories
//!
//! Three things can go wrong between a raw reading and a severity report:
//!
//! - **Invalid input**: a reading is negative or non-finite. The scales are
//!   only defined over `[0, ∞)`, so these are rejected before any
//!   arithmetic happens.
//! - **Model unavailable**: the predictive model could not be constructed
//!   or loaded, for example a missing or malformed artifact file.
//! - **Inference failure**: the model was loaded but a prediction attempt
//!   failed, or produced output that cannot be classified.
//!
//! ## Handling Strategy
//!
//! ```rust
//! use airindex_core::{AqiError, Pollutant};
//!
//! fn describe(err: AqiError) -> &'static str {
//!     match err {
//!         // Bad data from the station; drop the record and keep going
//!         AqiError::InvalidReading { .. } => "unusable reading",
//!         // Deployment problem; nothing to do but report it
//!         AqiError::ModelUnavailable { .. } => "model missing",
//!         // Model bug or artifact/feature mismatch
//!         AqiError::InferenceFailed { .. } => "inference error",
//!     }
//! }
//!
//! let err = AqiError::InvalidReading {
//!     pollutant: Pollutant::So2,
//!     value: -4.0,
//! };
//! assert_eq!(describe(err), "unusable reading");
//! ```

use thiserror_no_std::Error;

use crate::pollutant::Pollutant;

/// Result type for index operations
pub type AqiResult<T> = Result<T, AqiError>;

/// Errors from sub-index computation and model inference
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AqiError {
    /// Reading is outside the domain of the breakpoint scales.
    ///
    /// Raised for negative, NaN, and infinite concentrations. A reading of
    /// exactly zero is valid (clean air), so only strictly negative values
    /// are rejected.
    #[error("Invalid {pollutant} reading: {value}")]
    InvalidReading {
        /// Pollutant whose reading was rejected
        pollutant: Pollutant,
        /// The offending raw value
        value: f64,
    },

    /// The predictive model could not be obtained.
    ///
    /// Typically a construction or artifact-loading failure. The reason is
    /// a static string so the error stays `Copy`.
    #[error("Model unavailable: {reason}")]
    ModelUnavailable {
        /// What prevented the model from being used
        reason: &'static str,
    },

    /// The model was available but failed to produce a usable prediction.
    #[error("Inference failed: {reason}")]
    InferenceFailed {
        /// What went wrong during inference
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for AqiError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidReading { pollutant, value } => {
                defmt::write!(fmt, "Invalid {} reading: {}", pollutant.name(), value)
            }
            Self::ModelUnavailable { reason } => {
                defmt::write!(fmt, "Model unavailable: {}", reason)
            }
            Self::InferenceFailed { reason } => {
                defmt::write!(fmt, "Inference failed: {}", reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_copy() {
        let err = AqiError::InvalidReading {
            pollutant: Pollutant::No2,
            value: f64::NAN,
        };
        let copied = err;
        // Both copies stay usable
        assert!(matches!(err, AqiError::InvalidReading { .. }));
        assert!(matches!(copied, AqiError::InvalidReading { .. }));
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_messages() {
        let err = AqiError::InvalidReading {
            pollutant: Pollutant::Rspm,
            value: -12.5,
        };
        assert_eq!(err.to_string(), "Invalid RSPM reading: -12.5");

        let err = AqiError::ModelUnavailable {
            reason: "artifact not found",
        };
        assert_eq!(err.to_string(), "Model unavailable: artifact not found");

        let err = AqiError::InferenceFailed {
            reason: "feature count mismatch",
        };
        assert_eq!(err.to_string(), "Inference failed: feature count mismatch");
    }
}
