use std::{process::ExitCode, time::Duration};

use crate::outcome::{TestFailure, TestOutcome, TestStatus};

pub type TestOutcomes<'t> = Vec<(&'t str, TestOutcome)>;

/// Failed tests with their captured errors, in run order.
pub type FailureDigest<'r> = Vec<(&'r str, &'r TestFailure)>;

/// Everything a finished run produced.
///
/// `fmt_errors` holds errors the formatter returned along the way, tagged with
/// the name of the formatter hook that produced them.
#[derive(Debug)]
#[non_exhaustive]
pub struct TestReport<'t, FmtError> {
    pub outcomes: TestOutcomes<'t>,
    pub filtered_out: usize,
    pub duration: Duration,
    pub fmt_errors: Vec<(&'static str, FmtError)>,
}

impl<'t, FmtError> TestReport<'t, FmtError> {
    pub fn failure_digest(&self) -> FailureDigest<'_> {
        self.outcomes
            .iter()
            .filter_map(|(name, outcome)| match &outcome.status {
                TestStatus::Failed(failure) => Some((*name, failure)),
                _ => None,
            })
            .collect()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| outcome.passed()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| outcome.skipped()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| outcome.failed()).count()
    }

    pub fn exit_code(&self) -> ExitCode {
        exit_code(&self.failure_digest())
    }
}

/// The process exit status for a run: success unless anything failed.
///
/// Skips never affect the exit status.
pub fn exit_code(digest: &[(&str, &TestFailure)]) -> ExitCode {
    match digest.is_empty() {
        true => ExitCode::SUCCESS,
        false => ExitCode::FAILURE,
    }
}
