//! Pollutant identities and raw reading carriers.
//!
//! The index covers the four pollutants of the classical ambient monitoring
//! network: sulphur dioxide, nitrogen dioxide, and the two particulate
//! fractions (respirable and total suspended). Each pollutant is calibrated
//! against its own breakpoint scale (see [`crate::breakpoints`]) and the
//! scales are not interchangeable.
//!
//! [`Pollutant::ALL`] fixes the canonical ordering used everywhere a
//! pollutant index matters: feature-vector layout, reporting, iteration.

use core::fmt;

/// Pollutants tracked by the index.
///
/// Discriminants match the canonical feature order and must not be
/// renumbered; trained models consume features in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Pollutant {
    /// Sulphur dioxide
    So2 = 0,
    /// Nitrogen dioxide
    No2 = 1,
    /// Respirable suspended particulate matter (particles ≤ 10 µm)
    Rspm = 2,
    /// Suspended particulate matter (total)
    Spm = 3,
}

impl Pollutant {
    /// All pollutants in canonical feature order.
    pub const ALL: [Pollutant; 4] = [
        Pollutant::So2,
        Pollutant::No2,
        Pollutant::Rspm,
        Pollutant::Spm,
    ];

    /// Short uppercase identifier, as used in monitoring records.
    pub const fn name(&self) -> &'static str {
        match self {
            Pollutant::So2 => "SO2",
            Pollutant::No2 => "NO2",
            Pollutant::Rspm => "RSPM",
            Pollutant::Spm => "SPM",
        }
    }

    /// Human-readable pollutant name.
    pub const fn description(&self) -> &'static str {
        match self {
            Pollutant::So2 => "sulphur dioxide",
            Pollutant::No2 => "nitrogen dioxide",
            Pollutant::Rspm => "respirable suspended particulate matter",
            Pollutant::Spm => "suspended particulate matter",
        }
    }

    /// Unit of measurement for raw concentrations.
    ///
    /// All four pollutants are reported as mass concentrations.
    pub const fn unit(&self) -> &'static str {
        "µg/m³"
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One set of raw concentration readings, in each pollutant's native unit.
///
/// Values are expected to be finite and non-negative; violations are
/// rejected at the sub-index boundary rather than here, so a readings
/// struct can carry raw sensor output unmodified until it is scored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollutantReadings {
    /// Sulphur dioxide concentration (µg/m³)
    pub so2: f64,
    /// Nitrogen dioxide concentration (µg/m³)
    pub no2: f64,
    /// Respirable suspended particulate matter concentration (µg/m³)
    pub rspm: f64,
    /// Suspended particulate matter concentration (µg/m³)
    pub spm: f64,
}

impl PollutantReadings {
    /// Bundle four raw readings, in canonical pollutant order.
    pub const fn new(so2: f64, no2: f64, rspm: f64, spm: f64) -> Self {
        Self {
            so2,
            no2,
            rspm,
            spm,
        }
    }

    /// Reading for a single pollutant.
    pub const fn get(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::So2 => self.so2,
            Pollutant::No2 => self.no2,
            Pollutant::Rspm => self.rspm,
            Pollutant::Spm => self.spm,
        }
    }
}
