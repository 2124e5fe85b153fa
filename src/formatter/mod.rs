//! Output formatting for litmus.
//!
//! The harness reports progress through a formatter: once when the run starts,
//! before and after every test, and once with all outcomes at the end. Each
//! hook receives a small data object borrowing from the run.
//!
//! Formatting errors never abort a run. The harness collects them, together
//! with the name of the hook that failed, in the [`TestReport`](crate::TestReport).
//!
//! Implement [`TestFormatter`] (and [`TestListFormatter`] for `--list`) to
//! define a different output format.

use std::time::Duration;

use crate::outcome::{TestFailure, TestOutcome, TestStatus};

mod no;
pub use no::*;

mod plain;
pub use plain::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtRunStart {
    pub active: usize,
    pub filtered_out: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtTestStart<'t> {
    pub name: &'t str,
}

#[derive(Debug, Clone, Copy)]
pub struct FmtTestOutcome<'t, 'o> {
    pub name: &'t str,
    pub outcome: &'o TestOutcome,
}

#[derive(Debug, Clone, Copy)]
pub struct FmtRunOutcomes<'t, 'o> {
    pub outcomes: &'o [(&'t str, TestOutcome)],
    pub filtered_out: usize,
    pub duration: Duration,
}

impl<'t, 'o> FmtRunOutcomes<'t, 'o> {
    /// Failed tests with their captured errors, in run order.
    pub fn failures(&self) -> impl Iterator<Item = (&'t str, &'o TestFailure)> + use<'t, 'o> {
        let outcomes: &'o [(&'t str, TestOutcome)] = self.outcomes;
        outcomes
            .iter()
            .filter_map(|(name, outcome)| match &outcome.status {
                TestStatus::Failed(failure) => Some((*name, failure)),
                _ => None,
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtListTest<'t> {
    pub name: &'t str,
    pub is_async: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtEndListing {
    pub listed: usize,
    pub filtered_out: usize,
}

/// Receives run events from the harness.
///
/// Every hook has an empty default implementation, so a formatter only needs
/// to implement what it actually prints.
pub trait TestFormatter {
    type Error;

    fn fmt_run_start(&mut self, data: FmtRunStart) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    /// Called right before the test body is invoked.
    fn fmt_test_start(&mut self, data: FmtTestStart<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_test_outcome(&mut self, data: FmtTestOutcome<'_, '_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_run_outcomes(&mut self, data: FmtRunOutcomes<'_, '_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }
}

/// Receives listing events from the harness.
pub trait TestListFormatter {
    type Error;

    fn fmt_list_test(&mut self, data: FmtListTest<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_end_listing(&mut self, data: FmtEndListing) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }
}
