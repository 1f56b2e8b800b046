//! Test harness for drillhole incidence surveys.
//!
//! Drives the bridge the way a presentation layer would, then checks the
//! returned curves against geometric oracles.
//!
//! # Key Components
//!
//! - [`Survey`]: fluent API for building and running sweep requests
//! - [`oracle`]: verification functions returning pass/fail verdicts
//! - [`report`]: structured text survey descriptions
//! - [`helpers`]: error type and constructive orientations

pub mod helpers;
pub mod oracle;
pub mod report;
pub mod workflow;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use report::SurveyReport;
pub use workflow::{Survey, SurveyRun};
