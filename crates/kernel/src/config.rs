//! Numeric thresholds for the incidence pipeline.

use serde::{Deserialize, Serialize};

/// Tolerances applied by the incidence calculator, thickness mapper and sweep
/// continuity checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncidenceConfig {
    /// Vectors shorter than this cannot be normalized.
    pub zero_length: f64,
    /// Thickness ratios below this are treated as a grazing crossing.
    pub zero_ratio: f64,
    /// Largest rate of change of incidence with azimuth (degrees per degree)
    /// accepted between adjacent sweep samples.
    pub max_slope: f64,
}

impl Default for IncidenceConfig {
    fn default() -> Self {
        Self {
            zero_length: 1e-12,
            zero_ratio: 1e-12,
            // The incidence curve has slope at most 1 deg/deg; the slack absorbs roundoff.
            max_slope: 1.0 + 1e-9,
        }
    }
}

/// Process-wide default configuration.
pub fn default_config() -> IncidenceConfig {
    IncidenceConfig::default()
}
