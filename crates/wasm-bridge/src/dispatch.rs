use tracing::{debug, warn};

use incidence_kernel::{
    ratio_to_angle, sweep_planes, true_thickness, true_thickness_ratio, Drillhole, Plane,
};

use crate::error::BridgeError;
use crate::messages::{EngineToUi, SeriesData, UiToEngine};
use crate::{MAX_PLANES, MAX_REQUEST_SAMPLES};

/// Handle a UI message and return the response.
///
/// Failures never escape: they become [`EngineToUi::Error`].
pub fn dispatch(msg: UiToEngine) -> EngineToUi {
    let kind = msg.kind();
    debug!(kind, "dispatching message");
    match handle_message(msg) {
        Ok(response) => response,
        Err(e) => {
            warn!(kind, error = %e, "message failed");
            EngineToUi::Error {
                message: e.to_string(),
            }
        }
    }
}

/// Parse a JSON `UiToEngine`, dispatch it, and serialize the `EngineToUi` reply.
pub fn process_json(json_input: &str) -> String {
    let response = match serde_json::from_str::<UiToEngine>(json_input) {
        Ok(msg) => dispatch(msg),
        Err(e) => {
            let err = BridgeError::Parse {
                reason: e.to_string(),
            };
            warn!(error = %err, "rejecting message");
            EngineToUi::Error {
                message: err.to_string(),
            }
        }
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(
            r#"{{"type":"Error","message":"serialization failed: {}"}}"#,
            e.to_string().replace('"', "'")
        )
    })
}

fn handle_message(msg: UiToEngine) -> Result<EngineToUi, BridgeError> {
    match msg {
        UiToEngine::ComputeIncidence {
            strike,
            dip,
            azimuth,
            plunge,
        } => {
            let plane = Plane::new(strike, dip)?;
            let hole = Drillhole::new(azimuth, plunge)?;
            let angle = hole.incidence_with(&plane)?;
            Ok(EngineToUi::Incidence {
                angle,
                ratio: true_thickness_ratio(angle),
            })
        }

        UiToEngine::SweepAzimuth {
            plunge,
            planes,
            sweep,
        } => {
            if planes.is_empty() {
                return Err(BridgeError::NoPlanes);
            }
            if planes.len() > MAX_PLANES {
                return Err(BridgeError::TooManyPlanes {
                    count: planes.len(),
                    max: MAX_PLANES,
                });
            }
            let planes = planes
                .iter()
                .map(|p| Plane::new(p.strike, p.dip))
                .collect::<Result<Vec<_>, _>>()?;
            let sweep = sweep.unwrap_or_default();
            let count = sweep.sample_count()?.saturating_mul(planes.len());
            if count > MAX_REQUEST_SAMPLES {
                return Err(BridgeError::TooManySamples {
                    count,
                    max: MAX_REQUEST_SAMPLES,
                });
            }
            let series = sweep_planes(&planes, plunge, &sweep)?;
            Ok(EngineToUi::SweepComputed {
                plunge,
                series: series.into_iter().map(SeriesData::from).collect(),
            })
        }

        UiToEngine::ThicknessRatio { incidence_angle } => {
            let angle = require_finite("incidence_angle", incidence_angle)?;
            Ok(EngineToUi::Ratio {
                ratio: true_thickness_ratio(angle),
            })
        }

        UiToEngine::RatioToAngle { ratio } => {
            let ratio = require_finite("ratio", ratio)?;
            Ok(EngineToUi::Angle {
                angle: ratio_to_angle(ratio),
            })
        }

        UiToEngine::CorrectThickness {
            apparent,
            incidence_angle,
        } => {
            let apparent = require_finite("apparent", apparent)?;
            let angle = require_finite("incidence_angle", incidence_angle)?;
            Ok(EngineToUi::TrueThickness {
                thickness: true_thickness(apparent, angle),
            })
        }
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<f64, BridgeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BridgeError::NonFinite { field, value })
    }
}
