//! Sub-index quadruples and model feature vectors
//!
//! [`SubIndices`] holds the four per-pollutant sub-indices computed from
//! one set of readings. [`FeatureVector`] flattens them into the fixed
//! layout trained models consume: `[SOi, NOi, RPi, SPMi]`. That layout is
//! a schema contract shared with the training pipeline; reordering it
//! silently invalidates every deployed artifact, which is why the vector
//! type exists instead of a bare slice.

use crate::{
    errors::AqiResult,
    pollutant::{Pollutant, PollutantReadings},
};

/// Per-pollutant sub-indices derived from one set of readings.
///
/// All values are finite and non-negative; [`SubIndices::compute`] fails
/// rather than construct a quadruple from invalid readings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubIndices {
    /// Sulphur dioxide sub-index (SOi)
    pub so2: f64,
    /// Nitrogen dioxide sub-index (NOi)
    pub no2: f64,
    /// Respirable particulate sub-index (RPi)
    pub rspm: f64,
    /// Suspended particulate sub-index (SPMi)
    pub spm: f64,
}

impl SubIndices {
    /// Score every pollutant in `readings` against its breakpoint scale.
    ///
    /// Fails fast on the first invalid reading, in canonical pollutant
    /// order, without scoring the rest.
    pub fn compute(readings: &PollutantReadings) -> AqiResult<Self> {
        Ok(Self {
            so2: Pollutant::So2.sub_index(readings.so2)?,
            no2: Pollutant::No2.sub_index(readings.no2)?,
            rspm: Pollutant::Rspm.sub_index(readings.rspm)?,
            spm: Pollutant::Spm.sub_index(readings.spm)?,
        })
    }

    /// Sub-index for a single pollutant.
    pub const fn get(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::So2 => self.so2,
            Pollutant::No2 => self.no2,
            Pollutant::Rspm => self.rspm,
            Pollutant::Spm => self.spm,
        }
    }

    /// The pollutant with the highest sub-index, and that sub-index.
    ///
    /// Ties resolve to the earlier pollutant in canonical order. Useful
    /// for reporting which pollutant drives a bad reading.
    pub fn dominant(&self) -> (Pollutant, f64) {
        let mut worst = (Pollutant::So2, self.so2);
        for pollutant in [Pollutant::No2, Pollutant::Rspm, Pollutant::Spm] {
            let value = self.get(pollutant);
            if value > worst.1 {
                worst = (pollutant, value);
            }
        }
        worst
    }
}

/// Model input in the canonical feature layout.
///
/// Index positions follow [`Pollutant::ALL`]: SO2, NO2, RSPM, SPM.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureVector([f64; 4]);

impl FeatureVector {
    /// Number of features every model sees.
    pub const LEN: usize = 4;

    /// Flatten a sub-index quadruple into the canonical layout.
    pub const fn assemble(indices: &SubIndices) -> Self {
        Self([indices.so2, indices.no2, indices.rspm, indices.spm])
    }

    /// Features as a slice, in canonical order.
    pub const fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Features as a fixed-size array, in canonical order.
    pub const fn to_array(&self) -> [f64; 4] {
        self.0
    }

    /// Feature at a pollutant's canonical position.
    pub const fn get(&self, pollutant: Pollutant) -> f64 {
        self.0[pollutant as usize]
    }
}

impl AsRef<[f64]> for FeatureVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}
