//! Predictive models for the air quality index pipeline
//!
//! ## Overview
//!
//! `airindex-core` deliberately knows nothing about how predictions are
//! made; it defines the [`AqiModel`](airindex_core::AqiModel) seam and
//! stops there. This crate supplies the models that plug into it:
//!
//! - [`MaxIndexModel`]: the conventional worst-pollutant aggregation,
//!   reported as a numeric index
//! - [`ThresholdClassifier`]: the same aggregation reported as a
//!   severity label, for exercising the classifier path
//! - [`LinearModel`]: a linear fit over the sub-index features, loaded
//!   from small JSON artifacts produced by offline training
//!
//! The baselines have no parameters and work in `no_std` builds;
//! artifact loading needs `std` for filesystem and JSON support.
//!
//! ## Picking a Model
//!
//! ```rust
//! use airindex_core::{AqiPipeline, PollutantReadings};
//! use airindex_ml::MaxIndexModel;
//!
//! let pipeline = AqiPipeline::new(MaxIndexModel::new());
//! let assessment = pipeline.assess(&PollutantReadings::new(20.0, 30.0, 40.0, 60.0))?;
//! assert_eq!(assessment.index(), Some(66.66666666666667));
//! # Ok::<(), airindex_core::AqiError>(())
//! ```
//!
//! Swapping in a trained artifact changes one line:
//!
//! ```rust,no_run
//! use airindex_core::AqiPipeline;
//! use airindex_ml::LinearModel;
//!
//! let model = LinearModel::from_path("models/aqi_linear.json")?;
//! let pipeline = AqiPipeline::new(model);
//! # Ok::<(), airindex_core::AqiError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod baseline;
pub mod linear;

pub use baseline::{MaxIndexModel, ThresholdClassifier};
pub use linear::{LinearModel, ARTIFACT_VERSION};
