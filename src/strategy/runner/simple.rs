use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    time::Instant,
};

use tracing::debug;

use crate::{
    outcome::{TestFailure, TestOutcome, TestStatus},
    runner::{Scheduler, payload_as_string},
    test::{Invocation, Test},
};

/// Runs tests one after another on the calling thread.
#[derive(Debug, Default)]
pub struct SimpleRunner {
    scheduler: Scheduler,
}

impl SimpleRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a single test to completion and classify its outcome.
    ///
    /// Nothing a test body does (returning an error, skipping, panicking)
    /// escapes this call.
    pub fn run_test(&mut self, test: &Test) -> TestOutcome {
        let now = Instant::now();
        let status = match catch_unwind(AssertUnwindSafe(|| test.function().invoke())) {
            Ok(Invocation::Completed(result)) => result.into(),
            Ok(Invocation::Pending(future)) => self.scheduler.drive(future),
            Err(payload) => TestStatus::Failed(TestFailure::panicked(payload_as_string(payload))),
        };
        let duration = now.elapsed();

        debug!(test = %test.name, status = status.label(), ?duration, "test finished");
        TestOutcome::new(status, duration)
    }
}
