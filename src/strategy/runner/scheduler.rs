use std::{any::type_name, io};

use tokio::{
    runtime::{Builder, Runtime},
    task::LocalSet,
};
use tracing::{debug, warn};

use crate::{
    outcome::{TestFailure, TestStatus},
    runner::payload_as_string,
    test::TestFuture,
};

/// The cooperative scheduler suspending tests are driven on.
///
/// One current-thread tokio runtime is created the first time an async test
/// runs and is reused for the rest of the run. Every test gets its own
/// [`LocalSet`], so `spawn_local` tasks a test leaves behind are dropped with
/// it. Tasks left on the runtime itself (`tokio::spawn`) would otherwise run
/// during the next test, so a runtime that still has alive tasks after a test
/// is shut down and the next async test starts a fresh one.
#[derive(Debug, Default)]
pub struct Scheduler {
    runtime: Option<Runtime>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn runtime(&mut self) -> io::Result<&Runtime> {
        let runtime = match self.runtime.take() {
            Some(runtime) => runtime,
            None => {
                debug!("starting scheduler runtime");
                Builder::new_current_thread().enable_all().build()?
            }
        };
        let runtime: &Runtime = self.runtime.insert(runtime);
        Ok(runtime)
    }

    /// Drive `future` to completion and classify how it ended.
    pub fn drive(&mut self, future: TestFuture) -> TestStatus {
        let status: TestStatus = {
            let runtime = match self.runtime() {
                Ok(runtime) => runtime,
                Err(err) => {
                    return TestStatus::Failed(TestFailure::new(
                        type_name::<io::Error>(),
                        err.to_string(),
                    ));
                }
            };

            let local = LocalSet::new();
            let handle = local.spawn_local(future);
            match local.block_on(runtime, handle) {
                Ok(result) => result.into(),
                Err(err) if err.is_panic() => {
                    TestStatus::Failed(TestFailure::panicked(payload_as_string(err.into_panic())))
                }
                Err(err) => TestStatus::Failed(TestFailure::new("cancelled", err.to_string())),
            }
        };

        self.discard_leftover_tasks();
        status
    }

    fn discard_leftover_tasks(&mut self) {
        let Some(runtime) = &self.runtime else {
            return;
        };
        let leftover = runtime.metrics().num_alive_tasks();
        if leftover == 0 {
            return;
        }

        warn!(leftover, "test left spawned tasks behind, restarting scheduler runtime");
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
