//! Azimuth sweeps: incidence curves for a fixed plunge across a bearing range.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::thickness::true_thickness_ratio;
use crate::types::{Drillhole, GeometryError, Plane};

/// Upper bound on samples in one sweep.
pub const MAX_SWEEP_SAMPLES: usize = 1_000_000;

/// Inclusive range of azimuths, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AzimuthSweep {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Default for AzimuthSweep {
    /// Every whole degree from 0 to 360 inclusive (361 samples).
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 360.0,
            step: 1.0,
        }
    }
}

impl AzimuthSweep {
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, GeometryError> {
        let sweep = Self { start, end, step };
        sweep.validate()?;
        Ok(sweep)
    }

    /// Check bounds and step. Needed for sweeps built from public fields or
    /// deserialized input.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let invalid = |reason: String| Err(GeometryError::InvalidSweep { reason });
        if !self.start.is_finite() || !self.end.is_finite() || !self.step.is_finite() {
            return invalid(format!(
                "bounds must be finite (start={}, end={}, step={})",
                self.start, self.end, self.step
            ));
        }
        if self.step <= 0.0 {
            return invalid(format!("step must be positive, got {}", self.step));
        }
        if self.end < self.start {
            return invalid(format!("end {} is before start {}", self.end, self.start));
        }
        let span = (self.end - self.start) / self.step;
        if span >= MAX_SWEEP_SAMPLES as f64 {
            return invalid(format!(
                "{} samples exceeds the limit of {}",
                span.floor() + 1.0,
                MAX_SWEEP_SAMPLES
            ));
        }
        Ok(())
    }

    /// Number of samples, counting both ends when the step divides the span.
    /// Fails for a sweep that does not pass [`AzimuthSweep::validate`].
    pub fn sample_count(&self) -> Result<usize, GeometryError> {
        self.validate()?;
        // Slack keeps 0..360 step 0.1 from losing its last sample to roundoff.
        Ok(((self.end - self.start) / self.step + 1e-9).floor() as usize + 1)
    }

    /// Sample azimuths in ascending order. Each is `start + i * step` so error
    /// does not accumulate across the sweep.
    pub fn azimuths(&self) -> Result<impl Iterator<Item = f64> + '_, GeometryError> {
        let count = self.sample_count()?;
        Ok((0..count).map(move |i| self.start + i as f64 * self.step))
    }
}

/// One point on an incidence curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSample {
    pub azimuth: f64,
    /// Incidence angle, degrees in [0, 90].
    pub incidence: f64,
    /// True thickness ratio, sin(incidence).
    pub ratio: f64,
}

/// Incidence curve of one plane over an azimuth sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneSeries {
    /// 1-based position of the plane in the request.
    pub index: usize,
    /// Legend label, e.g. `Plane 1: 90°/45°`.
    pub label: String,
    pub plane: Plane,
    pub plunge: f64,
    pub samples: Vec<SweepSample>,
}

/// Extremes of an incidence curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Smallest incidence on the curve (worst crossing).
    pub min: f64,
    /// Largest incidence on the curve (best crossing).
    pub max: f64,
    /// Azimuth achieving `max`; the first one wins on ties.
    pub optimal_azimuth: f64,
    /// Azimuth achieving `min`; the first one wins on ties.
    pub grazing_azimuth: f64,
}

impl PlaneSeries {
    pub fn azimuths(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.azimuth).collect()
    }

    pub fn angles(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.incidence).collect()
    }

    pub fn ratios(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.ratio).collect()
    }

    /// `None` only for an empty series.
    pub fn summary(&self) -> Option<SeriesSummary> {
        let first = self.samples.first()?;
        let mut best = first;
        let mut worst = first;
        for s in &self.samples[1..] {
            if s.incidence > best.incidence {
                best = s;
            }
            if s.incidence < worst.incidence {
                worst = s;
            }
        }
        Some(SeriesSummary {
            min: worst.incidence,
            max: best.incidence,
            optimal_azimuth: best.azimuth,
            grazing_azimuth: worst.azimuth,
        })
    }
}

/// Steepest change in incidence per degree of azimuth between adjacent
/// samples, with the azimuth where that step starts. `None` with fewer than
/// two increasing samples.
pub fn steepest_slope(azimuths: &[f64], angles: &[f64]) -> Option<(f64, f64)> {
    azimuths
        .windows(2)
        .zip(angles.windows(2))
        .filter(|(az, _)| az[1] > az[0])
        .map(|(az, ang)| ((ang[1] - ang[0]).abs() / (az[1] - az[0]), az[0]))
        .fold(None, |worst: Option<(f64, f64)>, step| match worst {
            Some(w) if w.0 >= step.0 => Some(w),
            _ => Some(step),
        })
}

/// Legend label for the plane at 1-based `index`.
pub fn series_label(index: usize, plane: &Plane) -> String {
    format!("Plane {}: {}°/{}°", index, plane.strike, plane.dip)
}

/// Incidence curve of a single plane, labelled as plane 1.
pub fn sweep_plane(
    plane: &Plane,
    plunge: f64,
    sweep: &AzimuthSweep,
) -> Result<PlaneSeries, GeometryError> {
    sweep_indexed(1, plane, plunge, sweep)
}

/// Incidence curves for each plane, in input order.
#[instrument(skip(planes, sweep), fields(planes = planes.len()))]
pub fn sweep_planes(
    planes: &[Plane],
    plunge: f64,
    sweep: &AzimuthSweep,
) -> Result<Vec<PlaneSeries>, GeometryError> {
    let samples = sweep.sample_count()?;
    info!(
        start = sweep.start,
        end = sweep.end,
        step = sweep.step,
        samples,
        "sweeping azimuth"
    );
    planes
        .iter()
        .enumerate()
        .map(|(i, plane)| sweep_indexed(i + 1, plane, plunge, sweep))
        .collect()
}

fn sweep_indexed(
    index: usize,
    plane: &Plane,
    plunge: f64,
    sweep: &AzimuthSweep,
) -> Result<PlaneSeries, GeometryError> {
    let plane = Plane::new(plane.strike, plane.dip)?;
    let samples = sweep
        .azimuths()?
        .map(|azimuth| {
            let incidence = Drillhole::new(azimuth, plunge)?.incidence_with(&plane)?;
            Ok(SweepSample {
                azimuth,
                incidence,
                ratio: true_thickness_ratio(incidence),
            })
        })
        .collect::<Result<Vec<_>, GeometryError>>()?;

    let series = PlaneSeries {
        index,
        label: series_label(index, &plane),
        plane,
        plunge,
        samples,
    };
    if let Some(summary) = series.summary() {
        debug!(
            label = %series.label,
            min = summary.min,
            max = summary.max,
            optimal_azimuth = summary.optimal_azimuth,
            "series computed"
        );
    }
    Ok(series)
}
