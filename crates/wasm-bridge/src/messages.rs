use serde::{Deserialize, Serialize};

use incidence_kernel::{AzimuthSweep, Plane, PlaneSeries, SeriesSummary};

/// Messages from the UI to the engine.
/// Serialized as JSON with a `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToEngine {
    /// Incidence of one hole against one plane.
    ComputeIncidence {
        strike: f64,
        dip: f64,
        azimuth: f64,
        plunge: f64,
    },
    /// Incidence curves for each plane over an azimuth range.
    /// Omitting `sweep` uses every whole degree from 0 to 360.
    SweepAzimuth {
        plunge: f64,
        planes: Vec<Plane>,
        #[serde(default)]
        sweep: Option<AzimuthSweep>,
    },
    /// Map an incidence angle to its true thickness ratio.
    ThicknessRatio { incidence_angle: f64 },
    /// Map a true thickness ratio back to an incidence angle.
    RatioToAngle { ratio: f64 },
    /// Convert an along-hole thickness to true thickness.
    CorrectThickness { apparent: f64, incidence_angle: f64 },
}

impl UiToEngine {
    /// Tag name, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            UiToEngine::ComputeIncidence { .. } => "ComputeIncidence",
            UiToEngine::SweepAzimuth { .. } => "SweepAzimuth",
            UiToEngine::ThicknessRatio { .. } => "ThicknessRatio",
            UiToEngine::RatioToAngle { .. } => "RatioToAngle",
            UiToEngine::CorrectThickness { .. } => "CorrectThickness",
        }
    }
}

/// One labelled line series, laid out as parallel arrays for plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub label: String,
    pub strike: f64,
    pub dip: f64,
    pub azimuths: Vec<f64>,
    /// Incidence angle per azimuth (primary axis, degrees).
    pub angles: Vec<f64>,
    /// True thickness ratio per azimuth (secondary axis).
    pub ratios: Vec<f64>,
    pub summary: Option<SeriesSummary>,
}

impl From<PlaneSeries> for SeriesData {
    fn from(series: PlaneSeries) -> Self {
        Self {
            azimuths: series.azimuths(),
            angles: series.angles(),
            ratios: series.ratios(),
            summary: series.summary(),
            strike: series.plane.strike,
            dip: series.plane.dip,
            label: series.label,
        }
    }
}

/// Messages from the engine back to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineToUi {
    Incidence { angle: f64, ratio: f64 },
    SweepComputed { plunge: f64, series: Vec<SeriesData> },
    Ratio { ratio: f64 },
    Angle { angle: f64 },
    TrueThickness { thickness: f64 },
    /// The request could not be served.
    Error { message: String },
}
