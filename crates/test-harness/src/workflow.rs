//! Survey: a fluent API for scripting sweep requests in tests.
//!
//! Wraps `incidence_bridge::dispatch()` to test the real dispatch path, not a
//! simulation.

use incidence_bridge::messages::{EngineToUi, SeriesData, UiToEngine};
use incidence_kernel::{AzimuthSweep, Plane};
use tracing::debug;

use crate::helpers::HarnessError;
use crate::oracle::{self, OracleVerdict};

/// A drillhole plunge and the planes it is tested against.
#[derive(Debug, Clone)]
pub struct Survey {
    plunge: f64,
    planes: Vec<Plane>,
    sweep: Option<AzimuthSweep>,
}

/// The curves returned for a survey.
#[derive(Debug, Clone)]
pub struct SurveyRun {
    pub plunge: f64,
    pub series: Vec<SeriesData>,
}

impl Survey {
    /// Start a survey at the given plunge with no planes.
    pub fn new(plunge: f64) -> Self {
        Self {
            plunge,
            planes: Vec::new(),
            sweep: None,
        }
    }

    /// Add a plane. Validation happens on the engine side when the survey runs.
    pub fn plane(mut self, strike: f64, dip: f64) -> Self {
        self.planes.push(Plane { strike, dip });
        self
    }

    /// Override the default 0..=360 whole-degree sweep.
    pub fn sweep(mut self, start: f64, end: f64, step: f64) -> Self {
        self.sweep = Some(AzimuthSweep { start, end, step });
        self
    }

    pub fn plunge(&self) -> f64 {
        self.plunge
    }

    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    /// The request this survey sends.
    pub fn request(&self) -> UiToEngine {
        UiToEngine::SweepAzimuth {
            plunge: self.plunge,
            planes: self.planes.clone(),
            sweep: self.sweep,
        }
    }

    /// Dispatch the sweep and unpack the curves.
    pub fn run(&self) -> Result<SurveyRun, HarnessError> {
        debug!(plunge = self.plunge, planes = self.planes.len(), "running survey");
        match incidence_bridge::dispatch(self.request()) {
            EngineToUi::SweepComputed { plunge, series } => Ok(SurveyRun { plunge, series }),
            EngineToUi::Error { message } => Err(HarnessError::DispatchError { message }),
            other => Err(HarnessError::UnexpectedResponse {
                expected: "SweepComputed".to_string(),
                got: format!("{:?}", other),
            }),
        }
    }
}

impl SurveyRun {
    /// Series by 1-based plane number.
    pub fn series(&self, plane_number: usize) -> Result<&SeriesData, HarnessError> {
        plane_number
            .checked_sub(1)
            .and_then(|i| self.series.get(i))
            .ok_or_else(|| HarnessError::AssertionFailed {
                detail: format!(
                    "no plane {} (survey has {})",
                    plane_number,
                    self.series.len()
                ),
            })
    }

    /// Run series oracles on every curve and plane oracles on every plane.
    pub fn verify(&self) -> Vec<OracleVerdict> {
        let mut verdicts = Vec::new();
        for s in &self.series {
            verdicts.extend(oracle::run_series_checks(s));
            verdicts.extend(oracle::run_plane_checks(&Plane {
                strike: s.strike,
                dip: s.dip,
            }));
        }
        verdicts
    }

    /// Fail with the first failing oracle, if any.
    pub fn assert_all_pass(&self) -> Result<(), HarnessError> {
        match self.verify().into_iter().find(|v| !v.passed) {
            None => Ok(()),
            Some(v) => Err(HarnessError::OracleFailure {
                oracle: v.oracle_name,
                detail: v.detail,
            }),
        }
    }

    /// Incidence on plane `plane_number` at the sample nearest `azimuth`.
    pub fn angle_at(&self, plane_number: usize, azimuth: f64) -> Result<f64, HarnessError> {
        let series = self.series(plane_number)?;
        series
            .azimuths
            .iter()
            .zip(&series.angles)
            .min_by(|a, b| (a.0 - azimuth).abs().total_cmp(&(b.0 - azimuth).abs()))
            .map(|(_, angle)| *angle)
            .ok_or_else(|| HarnessError::AssertionFailed {
                detail: format!("{}: empty series", series.label),
            })
    }
}
