//! Test execution for litmus.
//!
//! The runner drives one test at a time to a [`TestOutcome`]. Synchronous
//! bodies are called directly. Suspending bodies are handed to the
//! [`Scheduler`], a single-threaded cooperative executor shared by the whole
//! run. No two tests ever execute at the same time.
//!
//! Panics are part of the classification: a panicking body fails with the
//! panic message, exactly like a body returning an error.
//!
//! [`TestOutcome`]: crate::outcome::TestOutcome

mod panic;
pub use panic::*;

mod scheduler;
pub use scheduler::*;

mod simple;
pub use simple::*;
