//! Check runner for pagegen.
//!
//! Runs named checks sequentially, isolating failures per check, and reports
//! pass/fail counts plus an exit status.

pub mod runner;
pub mod smoke;

pub use runner::{
    assert_true, CaseReport, CheckResult, Failure, Outcome, RunSummary, TestSuite,
    DEFAULT_FAILURE_MESSAGE,
};
pub use smoke::smoke_suite;
