//! Sequential check runner.
//!
//! Checks run one at a time in registration order. Each check runs behind its
//! own failure boundary: an error or a panic inside one check is recorded as
//! that check's failure and the run carries on with the next one.

use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use std::time::{Duration, Instant};

/// What a check returns. Any error counts as a failure.
pub type CheckResult = anyhow::Result<()>;

type Action = Box<dyn FnOnce() -> CheckResult>;

/// Message used when an assertion carries none.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Assertion failed";

const PANIC_FALLBACK_MESSAGE: &str = "check panicked";

/// A failed assertion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self::default()
        } else {
            Self { message }
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Failure {
    fn default() -> Self {
        Self {
            message: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Fail with `message` unless `condition` holds.
///
/// An empty message falls back to [`DEFAULT_FAILURE_MESSAGE`].
pub fn assert_true(condition: bool, message: &str) -> Result<(), Failure> {
    if condition {
        Ok(())
    } else {
        Err(Failure::new(message))
    }
}

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed { message: String },
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// Result of one executed check.
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub name: String,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

/// Aggregate result of a run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
    /// Per-check reports in execution order
    pub cases: Vec<CaseReport>,
}

impl RunSummary {
    /// True when no check failed.
    pub fn success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status: 0 when every check passed, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.success() {
            0
        } else {
            1
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    fn record(&mut self, report: CaseReport) {
        if report.outcome.is_passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.total += 1;
        self.cases.push(report);
    }
}

struct TestCase {
    name: String,
    action: Action,
}

/// An ordered list of named checks.
///
/// [`TestSuite::run`] consumes the suite, so it executes exactly once.
#[derive(Default)]
pub struct TestSuite {
    cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check. Nothing runs until [`TestSuite::run`]; duplicate names are kept.
    pub fn register<F>(&mut self, name: impl Into<String>, action: F) -> &mut Self
    where
        F: FnOnce() -> CheckResult + 'static,
    {
        self.cases.push(TestCase {
            name: name.into(),
            action: Box::new(action),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Run every check, writing progress to stdout.
    pub fn run(self) -> RunSummary {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Run every check, writing progress to `out`.
    ///
    /// Write errors on `out` are ignored; they never affect the summary.
    pub fn run_with_output<W: Write>(self, out: &mut W) -> RunSummary {
        let mut summary = RunSummary::default();

        let _ = writeln!(out, "🧪 Running test suite...\n");

        for case in self.cases {
            let _ = writeln!(out, "▶️  {}", case.name);

            let start = Instant::now();
            let outcome = execute(case.action);
            let elapsed = start.elapsed();

            match &outcome {
                Outcome::Passed => {
                    let _ = writeln!(out, "✅ PASS: {}", case.name);
                }
                Outcome::Failed { message } => {
                    let _ = writeln!(out, "❌ FAIL: {} - {}", case.name, message);
                }
            }
            let _ = writeln!(out);
            tracing::debug!("Check '{}' finished in {:?}", case.name, elapsed);

            summary.record(CaseReport {
                name: case.name,
                outcome,
                elapsed,
            });
        }

        let _ = writeln!(out, "📊 Test Results:");
        let _ = writeln!(out, "   Passed: {}", summary.passed);
        let _ = writeln!(out, "   Failed: {}", summary.failed);
        let _ = writeln!(out, "   Total:  {}", summary.total);

        if summary.success() {
            let _ = writeln!(out, "\n✅ All tests passed!");
        } else {
            let _ = writeln!(out, "\n❌ Some tests failed!");
        }

        summary
    }
}

/// Run one action inside a failure boundary.
///
/// The process panic hook is left in place: a panicking check still prints
/// its panic message to stderr, and the recorded outcome carries the same text.
fn execute(action: Action) -> Outcome {
    match panic::catch_unwind(AssertUnwindSafe(action)) {
        Ok(Ok(())) => Outcome::Passed,
        Ok(Err(e)) => {
            let message = format!("{:#}", e);
            Outcome::Failed {
                message: if message.is_empty() {
                    DEFAULT_FAILURE_MESSAGE.to_string()
                } else {
                    message
                },
            }
        }
        Err(payload) => Outcome::Failed {
            message: panic_message(payload),
        },
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        PANIC_FALLBACK_MESSAGE.to_string()
    }
}
