//! A small, explicit test harness.
//!
//! Tests are plain functions collected into a [`Registry`](registry::Registry).
//! The harness discovers the ones whose name carries the marker prefix, runs
//! them one after another in name order and reports every test as passed,
//! skipped or failed. Suspending tests are driven on a single-threaded
//! scheduler and never interleave with each other.
//!
//! ```no_run
//! use litmus::{TestError, assertion::*, registry, skip};
//!
//! fn test_addition() -> AssertResult {
//!     assert_equal(1 + 1, 2)
//! }
//!
//! fn test_later() -> Result<(), TestError> {
//!     skip("not implemented yet")?;
//!     Ok(())
//! }
//!
//! async fn test_suspending() -> AssertResult {
//!     tokio::task::yield_now().await;
//!     assert_true(true)
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     let registry = registry![test_addition, test_later, async test_suspending]
//!         .expect("test names are unique");
//!     litmus::cli::main(&registry)
//! }
//! ```

pub mod assertion;
pub mod cli;
pub mod formatter;
pub mod outcome;
pub mod registry;

mod strategy;
pub use strategy::*;

mod harness;
pub use harness::*;

mod report;
pub use report::*;

mod error;
pub use error::*;

#[cfg(test)]
mod test_support;
