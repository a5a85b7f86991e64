//! Core air quality index engine
//!
//! Converts raw pollutant concentrations into standardized sub-indices,
//! assembles them into model-ready feature vectors, and resolves model
//! predictions into severity categories. Designed to run anywhere, from
//! servers ingesting monitoring-station archives down to `no_std`
//! micro-controllers sitting next to the sensors.
//!
//! ## Features
//!
//! - **Breakpoint scales**: piecewise-linear tables mapping SO2, NO2,
//!   RSPM, and SPM concentrations onto a common 0-500+ scale, matching
//!   the published tables digit for digit
//! - **Severity categories**: six bands from Good to Hazardous, with
//!   canonical labels and health advisories
//! - **Model seam**: a small trait boundary so regression and
//!   classification models plug in interchangeably, with no global state
//! - **Strict input validation**: negative and non-finite readings are
//!   rejected before any index arithmetic
//!
//! ## Quick Start
//!
//! ```rust
//! use airindex_core::{AqiCategory, PollutantReadings, SubIndices};
//!
//! // Raw concentrations in µg/m³: SO2, NO2, RSPM, SPM
//! let readings = PollutantReadings::new(20.0, 30.0, 40.0, 60.0);
//!
//! let indices = SubIndices::compute(&readings)?;
//! let (worst, value) = indices.dominant();
//! let category = AqiCategory::from_index(value);
//!
//! println!("{worst} drives the index: {value:.1} ({category})");
//! # Ok::<(), airindex_core::AqiError>(())
//! ```
//!
//! Running a model over the features instead:
//!
//! ```rust
//! use airindex_core::{AqiModel, AqiPipeline, FeatureVector, PollutantReadings};
//! use airindex_core::{AqiResult, Prediction};
//!
//! struct WorstPollutant;
//!
//! impl AqiModel for WorstPollutant {
//!     fn predict(&self, features: &FeatureVector) -> AqiResult<Prediction> {
//!         let worst = features.as_slice().iter().cloned().fold(0.0, f64::max);
//!         Ok(Prediction::Index(worst))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "worst-pollutant"
//!     }
//! }
//!
//! let pipeline = AqiPipeline::new(WorstPollutant);
//! let assessment = pipeline.assess(&PollutantReadings::new(20.0, 30.0, 40.0, 60.0))?;
//! println!("{} - {}", assessment.category, assessment.category.advisory());
//! # Ok::<(), airindex_core::AqiError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): error trait integration, logging, serde support
//! - `embedded`: `defmt` formatting for RTT-based log transports

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod breakpoints;
pub mod category;
pub mod errors;
pub mod features;
pub mod model;
pub mod pipeline;
pub mod pollutant;

pub use breakpoints::{
    Breakpoint, BreakpointTable, NO2_BREAKPOINTS, RSPM_BREAKPOINTS, SO2_BREAKPOINTS,
    SPM_BREAKPOINTS,
};
pub use category::AqiCategory;
pub use errors::{AqiError, AqiResult};
pub use features::{FeatureVector, SubIndices};
pub use model::{AqiModel, Prediction};
pub use pipeline::{AqiPipeline, Assessment};
pub use pollutant::{Pollutant, PollutantReadings};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
