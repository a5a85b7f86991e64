//! Severity categories for scalar index values
//!
//! A numeric AQI is folded into one of six bands via inclusive upper
//! thresholds: values at exactly 50, 100, 200, 300, or 400 belong to the
//! band below the threshold. The top band is unbounded.
//!
//! ```rust
//! use airindex_core::AqiCategory;
//!
//! assert_eq!(AqiCategory::from_index(50.0), AqiCategory::Good);
//! assert_eq!(AqiCategory::from_index(50.1), AqiCategory::Moderate);
//! assert_eq!(AqiCategory::from_index(612.0), AqiCategory::Hazardous);
//! ```

use core::fmt;

/// Severity bands for the air quality index.
///
/// Ordered from least to most severe, so categories compare with `<`:
/// `Good < Moderate < ... < Hazardous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AqiCategory {
    /// AQI 0-50: clean air
    Good = 0,
    /// AQI 51-100: acceptable for most people
    Moderate = 1,
    /// AQI 101-200: sensitive groups affected
    Poor = 2,
    /// AQI 201-300: everyone may notice effects
    Unhealthy = 3,
    /// AQI 301-400: health alert
    VeryUnhealthy = 4,
    /// AQI above 400: emergency conditions
    Hazardous = 5,
}

impl AqiCategory {
    /// All categories, least to most severe.
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::Poor,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Classify a scalar index value.
    ///
    /// Thresholds are inclusive on the upper side, so `from_index(100.0)`
    /// is [`Moderate`](AqiCategory::Moderate) and `from_index(100.1)` is
    /// [`Poor`](AqiCategory::Poor). Negative input folds into
    /// [`Good`](AqiCategory::Good); the scales never produce it, but a
    /// defective regression model might, and under-reporting severity is
    /// the safe direction. Callers are expected to pass finite values
    /// (the pipeline rejects non-finite predictions before classifying).
    pub fn from_index(aqi: f64) -> Self {
        if aqi <= 50.0 {
            AqiCategory::Good
        } else if aqi <= 100.0 {
            AqiCategory::Moderate
        } else if aqi <= 200.0 {
            AqiCategory::Poor
        } else if aqi <= 300.0 {
            AqiCategory::Unhealthy
        } else if aqi <= 400.0 {
            AqiCategory::VeryUnhealthy
        } else {
            AqiCategory::Hazardous
        }
    }

    /// Canonical label, matching the strings classification models emit.
    pub const fn name(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Health guidance for this band.
    pub const fn advisory(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Air quality is satisfactory with minimal health impact",
            AqiCategory::Moderate => "Minor breathing discomfort possible for sensitive people",
            AqiCategory::Poor => "Breathing discomfort for people with lung or heart disease",
            AqiCategory::Unhealthy => "Breathing discomfort for most people on prolonged exposure",
            AqiCategory::VeryUnhealthy => "Respiratory illness likely on prolonged exposure",
            AqiCategory::Hazardous => "Serious health effects; avoid outdoor activity",
        }
    }

    /// Parse a canonical label back into a category.
    ///
    /// Matching is ASCII case-insensitive, so `"GOOD"` and `"good"` both
    /// resolve. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        AqiCategory::ALL
            .iter()
            .copied()
            .find(|category| category.name().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_classification() {
        // Each threshold belongs to the band below it
        assert_eq!(AqiCategory::from_index(50.0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_index(50.01), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_index(100.0), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_index(100.01), AqiCategory::Poor);
        assert_eq!(AqiCategory::from_index(200.0), AqiCategory::Poor);
        assert_eq!(AqiCategory::from_index(200.01), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_index(300.0), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_index(300.01), AqiCategory::VeryUnhealthy);
        assert_eq!(AqiCategory::from_index(400.0), AqiCategory::VeryUnhealthy);
        assert_eq!(AqiCategory::from_index(400.01), AqiCategory::Hazardous);
    }

    #[test]
    fn extremes() {
        assert_eq!(AqiCategory::from_index(0.0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_index(-5.0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_index(1500.0), AqiCategory::Hazardous);
    }

    #[test]
    fn classification_is_stable() {
        // Repeated classification of the same value never flips
        for boundary in [0.0, 50.0, 100.0, 200.0, 300.0, 400.0] {
            assert_eq!(
                AqiCategory::from_index(boundary),
                AqiCategory::from_index(boundary)
            );
        }
    }

    #[test]
    fn severity_ordering() {
        for pair in AqiCategory::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(AqiCategory::Good < AqiCategory::Hazardous);
    }

    #[test]
    fn labels_round_trip() {
        for category in AqiCategory::ALL {
            assert_eq!(AqiCategory::from_label(category.name()), Some(category));
        }
        assert_eq!(
            AqiCategory::from_label("VERY UNHEALTHY"),
            Some(AqiCategory::VeryUnhealthy)
        );
        assert_eq!(AqiCategory::from_label("good"), Some(AqiCategory::Good));
        assert_eq!(AqiCategory::from_label("pristine"), None);
        assert_eq!(AqiCategory::from_label(""), None);
    }

    #[test]
    fn advisories_are_distinct() {
        for pair in AqiCategory::ALL.windows(2) {
            assert_ne!(pair[0].advisory(), pair[1].advisory());
        }
    }
}
