use std::{
    borrow::Cow,
    fmt::{self, Display},
    time::Duration,
};

use crate::{TestError, test::TestResult};

#[derive(Debug)]
#[non_exhaustive]
pub struct TestOutcome {
    pub status: TestStatus,
    pub duration: Duration,
}

impl TestOutcome {
    pub fn new(status: TestStatus, duration: Duration) -> Self {
        Self { status, duration }
    }

    pub fn is_good(&self) -> bool {
        self.status.is_good()
    }

    pub fn is_bad(&self) -> bool {
        self.status.is_bad()
    }

    pub fn passed(&self) -> bool {
        self.status.passed()
    }

    pub fn skipped(&self) -> bool {
        self.status.skipped()
    }

    pub fn failed(&self) -> bool {
        self.status.failed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestStatus {
    Passed,
    Skipped { reason: Option<Cow<'static, str>> },
    Failed(TestFailure),
}

impl TestStatus {
    pub fn is_good(&self) -> bool {
        matches!(self, TestStatus::Passed | TestStatus::Skipped { .. })
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, TestStatus::Failed(_))
    }

    pub fn passed(&self) -> bool {
        matches!(self, TestStatus::Passed)
    }

    pub fn skipped(&self) -> bool {
        matches!(self, TestStatus::Skipped { .. })
    }

    pub fn failed(&self) -> bool {
        matches!(self, TestStatus::Failed(_))
    }

    /// The suffix the plain formatter puts behind a test name.
    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Passed => "ok",
            TestStatus::Skipped { .. } => "SKIPPED",
            TestStatus::Failed(_) => "FAILED",
        }
    }
}

/// The captured error of a failed test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFailure {
    pub kind: Cow<'static, str>,
    pub message: String,
}

impl TestFailure {
    pub const PANIC_KIND: &'static str = "panic";

    pub fn new(kind: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn panicked(message: impl Into<String>) -> Self {
        Self::new(Self::PANIC_KIND, message)
    }
}

impl Display for TestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - \"{}\"", self.kind, self.message)
    }
}

impl From<TestError> for TestStatus {
    fn from(value: TestError) -> Self {
        match value {
            TestError::Skip(skip) => TestStatus::Skipped {
                reason: skip.reason,
            },
            TestError::Raised(raised) => {
                TestStatus::Failed(TestFailure::new(raised.kind(), raised.message()))
            }
        }
    }
}

impl From<TestResult> for TestStatus {
    fn from(value: TestResult) -> Self {
        match value.0 {
            Ok(()) => TestStatus::Passed,
            Err(err) => err.into(),
        }
    }
}
