//! Structured text survey reports.
//!
//! Reports are plain text rather than JSON so a failing test prints
//! something a person can read at a glance.

use std::fmt;

use incidence_kernel::{true_thickness_ratio, SeriesSummary};

use crate::oracle::OracleVerdict;
use crate::workflow::{Survey, SurveyRun};

/// A complete survey report with all sections.
pub struct SurveyReport {
    pub plunge: f64,
    pub entries: Vec<SeriesEntry>,
    pub oracle_results: Vec<OracleVerdict>,
    pub errors: Vec<String>,
}

/// A single plane's report entry.
pub struct SeriesEntry {
    pub index: usize,
    pub label: String,
    pub sample_count: usize,
    pub azimuth_range: Option<(f64, f64)>,
    pub summary: Option<SeriesSummary>,
}

impl SurveyReport {
    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Drillhole Incidence Report ===\n\n");
        out.push_str(&format!("Plunge: {}°\n", self.plunge));
        out.push_str(&format!("Planes ({}):\n", self.entries.len()));

        for entry in &self.entries {
            out.push_str(&format!("  [{}] {}\n", entry.index, entry.label));
            match entry.azimuth_range {
                Some((start, end)) => out.push_str(&format!(
                    "      Samples: {} over azimuth {}..{}\n",
                    entry.sample_count, start, end
                )),
                None => out.push_str("      Samples: none\n"),
            }
            if let Some(s) = entry.summary {
                out.push_str(&format!(
                    "      Incidence: min {:.2} deg at {}, max {:.2} deg at {}\n",
                    s.min, s.grazing_azimuth, s.max, s.optimal_azimuth,
                ));
                out.push_str(&format!(
                    "      Thickness ratio: {:.3} .. {:.3}\n",
                    true_thickness_ratio(s.min),
                    true_thickness_ratio(s.max),
                ));
            }
        }

        // Oracle results
        if !self.oracle_results.is_empty() {
            out.push_str(&format!(
                "\nOracle Results ({} checks):\n",
                self.oracle_results.len()
            ));
            for v in &self.oracle_results {
                let status = if v.passed { "PASS" } else { "FAIL" };
                out.push_str(&format!("  [{}] {}: {}\n", status, v.oracle_name, v.detail));
            }
        }

        // Errors
        if self.errors.is_empty() {
            out.push_str("\nErrors: none\n");
        } else {
            out.push_str(&format!("\nErrors ({}):\n", self.errors.len()));
            for msg in &self.errors {
                out.push_str(&format!("  {}\n", msg));
            }
        }

        out
    }

    pub fn all_passed(&self) -> bool {
        self.errors.is_empty() && self.oracle_results.iter().all(|v| v.passed)
    }
}

impl fmt::Display for SurveyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl SurveyRun {
    /// Report the curves of this run together with all oracle verdicts.
    pub fn report(&self) -> SurveyReport {
        let entries = self
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| SeriesEntry {
                index: i + 1,
                label: s.label.clone(),
                sample_count: s.azimuths.len(),
                azimuth_range: s.azimuths.first().zip(s.azimuths.last()).map(|(a, b)| (*a, *b)),
                summary: s.summary,
            })
            .collect();

        SurveyReport {
            plunge: self.plunge,
            entries,
            oracle_results: self.verify(),
            errors: Vec::new(),
        }
    }
}

impl Survey {
    /// Run the survey and report it. A rejected request yields a report
    /// with no planes and the engine's error message.
    pub fn report(&self) -> SurveyReport {
        match self.run() {
            Ok(run) => run.report(),
            Err(e) => SurveyReport {
                plunge: self.plunge(),
                entries: Vec::new(),
                oracle_results: Vec::new(),
                errors: vec![e.to_string()],
            },
        }
    }
}
