//! Piecewise-linear breakpoint scales for pollutant sub-indices
//!
//! ## Background
//!
//! Each pollutant's raw concentration is mapped onto a common 0-500+ index
//! scale through a table of linear segments. A segment covers a half-open
//! concentration band `[lower, upper)` and carries the index value at the
//! band's lower edge plus the slope applied within the band:
//!
//! ```text
//! sub_index = index_base + (reading - lower) * scale
//! ```
//!
//! The bands partition `[0, ∞)` with no gaps or overlaps, and the slopes
//! are chosen so adjacent segments meet: approaching a band edge from
//! below yields the next band's `index_base`. The final band of every
//! scale is open-ended (`upper` is infinite), so any finite non-negative
//! reading lands in exactly one segment and extreme pollution events can
//! push the index past 500 rather than saturating.
//!
//! ## Tables
//!
//! The four scales are compiled in as `const` data:
//!
//! - [`SO2_BREAKPOINTS`] - sulphur dioxide
//! - [`NO2_BREAKPOINTS`] - nitrogen dioxide
//! - [`RSPM_BREAKPOINTS`] - respirable particulates
//! - [`SPM_BREAKPOINTS`] - total suspended particulates
//!
//! Slopes are written as the quotient of index span over concentration
//! span (`50.0 / 40.0` rather than `1.25`) so each row can be checked
//! against the published tables by eye. Editing a row requires restating
//! the neighbouring rows' continuity, which the unit tests enforce.
//!
//! ## Usage
//!
//! ```rust
//! use airindex_core::Pollutant;
//!
//! let soi = Pollutant::So2.sub_index(60.0)?;
//! assert_eq!(soi, 75.0);
//! # Ok::<(), airindex_core::AqiError>(())
//! ```

use crate::{
    errors::{AqiError, AqiResult},
    pollutant::Pollutant,
};

/// One linear segment of a breakpoint scale.
///
/// Covers the half-open concentration band `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    lower: f64,
    upper: f64,
    index_base: f64,
    scale: f64,
}

impl Breakpoint {
    const fn new(lower: f64, upper: f64, index_base: f64, scale: f64) -> Self {
        Self {
            lower,
            upper,
            index_base,
            scale,
        }
    }

    /// Lower concentration bound (inclusive).
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper concentration bound (exclusive). Infinite for the last
    /// segment of a scale.
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// Index value at the lower bound of this segment.
    pub const fn index_base(&self) -> f64 {
        self.index_base
    }

    /// Index increase per unit of concentration within this segment.
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Whether `reading` falls inside this segment's band.
    pub fn contains(&self, reading: f64) -> bool {
        self.lower <= reading && reading < self.upper
    }

    /// Linear interpolation within this segment.
    fn apply(&self, reading: f64) -> f64 {
        self.index_base + (reading - self.lower) * self.scale
    }
}

/// Ordered breakpoint scale for one pollutant.
///
/// Segments are sorted by concentration and contiguous: each segment's
/// `upper` equals the next segment's `lower`.
#[derive(Debug, Clone, Copy)]
pub struct BreakpointTable {
    pollutant: Pollutant,
    segments: &'static [Breakpoint],
}

impl BreakpointTable {
    /// Pollutant this scale is calibrated for.
    pub const fn pollutant(&self) -> Pollutant {
        self.pollutant
    }

    /// The scale's segments, in ascending concentration order.
    pub const fn segments(&self) -> &'static [Breakpoint] {
        self.segments
    }

    /// Map a raw concentration onto the sub-index scale.
    ///
    /// Negative, NaN, and infinite readings are rejected up front; the
    /// scales are only defined over finite non-negative concentrations.
    /// Zero maps to zero on every scale.
    pub fn sub_index(&self, reading: f64) -> AqiResult<f64> {
        if !reading.is_finite() || reading < 0.0 {
            return Err(AqiError::InvalidReading {
                pollutant: self.pollutant,
                value: reading,
            });
        }

        for segment in self.segments {
            if reading < segment.upper {
                return Ok(segment.apply(reading));
            }
        }

        // Unreachable: the last segment's upper bound is infinite, so
        // every finite reading matches above.
        Err(AqiError::InvalidReading {
            pollutant: self.pollutant,
            value: reading,
        })
    }
}

/// Sulphur dioxide scale (µg/m³).
pub const SO2_BREAKPOINTS: BreakpointTable = BreakpointTable {
    pollutant: Pollutant::So2,
    segments: &[
        Breakpoint::new(0.0, 40.0, 0.0, 50.0 / 40.0),
        Breakpoint::new(40.0, 80.0, 50.0, 50.0 / 40.0),
        Breakpoint::new(80.0, 380.0, 100.0, 100.0 / 300.0),
        Breakpoint::new(380.0, 800.0, 200.0, 100.0 / 420.0),
        Breakpoint::new(800.0, 1600.0, 300.0, 100.0 / 800.0),
        Breakpoint::new(1600.0, f64::INFINITY, 400.0, 100.0 / 800.0),
    ],
};

/// Nitrogen dioxide scale (µg/m³).
pub const NO2_BREAKPOINTS: BreakpointTable = BreakpointTable {
    pollutant: Pollutant::No2,
    segments: &[
        Breakpoint::new(0.0, 40.0, 0.0, 50.0 / 40.0),
        Breakpoint::new(40.0, 80.0, 50.0, 50.0 / 40.0),
        Breakpoint::new(80.0, 180.0, 100.0, 100.0 / 100.0),
        Breakpoint::new(180.0, 280.0, 200.0, 100.0 / 100.0),
        Breakpoint::new(280.0, 400.0, 300.0, 100.0 / 120.0),
        Breakpoint::new(400.0, f64::INFINITY, 400.0, 100.0 / 120.0),
    ],
};

/// Respirable suspended particulate matter scale (µg/m³).
pub const RSPM_BREAKPOINTS: BreakpointTable = BreakpointTable {
    pollutant: Pollutant::Rspm,
    segments: &[
        Breakpoint::new(0.0, 30.0, 0.0, 50.0 / 30.0),
        Breakpoint::new(30.0, 60.0, 50.0, 50.0 / 30.0),
        Breakpoint::new(60.0, 90.0, 100.0, 100.0 / 30.0),
        Breakpoint::new(90.0, 120.0, 200.0, 100.0 / 30.0),
        Breakpoint::new(120.0, 250.0, 300.0, 100.0 / 130.0),
        Breakpoint::new(250.0, f64::INFINITY, 400.0, 100.0 / 130.0),
    ],
};

/// Suspended particulate matter scale (µg/m³).
pub const SPM_BREAKPOINTS: BreakpointTable = BreakpointTable {
    pollutant: Pollutant::Spm,
    segments: &[
        Breakpoint::new(0.0, 50.0, 0.0, 50.0 / 50.0),
        Breakpoint::new(50.0, 100.0, 50.0, 50.0 / 50.0),
        Breakpoint::new(100.0, 250.0, 100.0, 100.0 / 150.0),
        Breakpoint::new(250.0, 350.0, 200.0, 100.0 / 100.0),
        Breakpoint::new(350.0, 430.0, 300.0, 100.0 / 80.0),
        Breakpoint::new(430.0, f64::INFINITY, 400.0, 100.0 / 430.0),
    ],
};

impl Pollutant {
    /// Breakpoint scale calibrated for this pollutant.
    pub const fn breakpoints(&self) -> &'static BreakpointTable {
        match self {
            Pollutant::So2 => &SO2_BREAKPOINTS,
            Pollutant::No2 => &NO2_BREAKPOINTS,
            Pollutant::Rspm => &RSPM_BREAKPOINTS,
            Pollutant::Spm => &SPM_BREAKPOINTS,
        }
    }

    /// Sub-index for one raw reading of this pollutant.
    ///
    /// Shorthand for [`BreakpointTable::sub_index`] on
    /// [`Pollutant::breakpoints`].
    pub fn sub_index(&self, reading: f64) -> AqiResult<f64> {
        self.breakpoints().sub_index(reading)
    }
}
