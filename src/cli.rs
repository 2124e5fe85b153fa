//! Command-line front end for test programs.
//!
//! A test program builds its [`Registry`] and hands it to [`main`]:
//!
//! ```no_run
//! fn test_nothing() {}
//!
//! fn main() -> std::process::ExitCode {
//!     let registry = litmus::registry![test_nothing].expect("unique test names");
//!     litmus::cli::main(&registry)
//! }
//! ```
//!
//! ## Flags
//!
//! - `--test <NAME>` - run only this test, repeatable
//! - `--test-prefix <PREFIX>` - run only tests starting with this prefix, repeatable
//! - `--list` - print the tests that would run and exit
//! - `--marker <PREFIX>` - the prefix marking discoverable tests (`test_`)
//!
//! `--test` and `--test-prefix` are mutually exclusive. Usage errors are
//! reported before any test runs and exit with status 2.

use std::{env, ffi::OsString, fmt::Display, io, process::ExitCode};

use clap::{CommandFactory, Parser, error::ErrorKind};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::{
    filter::{ConfigError, DefaultFilter, Selection},
    formatter::PlainFormatter,
    registry::Registry,
};

/// Exit status for invalid command lines.
pub const USAGE_ERROR: u8 = 2;

/// Run the registered tests.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(about, long_about = None)]
pub struct Args {
    /// Run only the test with this name
    #[arg(long = "test", value_name = "NAME")]
    pub tests: Vec<String>,

    /// Run only tests whose name starts with this prefix
    #[arg(long = "test-prefix", value_name = "PREFIX", conflicts_with = "tests")]
    pub test_prefixes: Vec<String>,

    /// List the tests that would run without running them
    #[arg(long)]
    pub list: bool,

    /// Prefix that marks a registered function as a test
    #[arg(
        long,
        value_name = "PREFIX",
        env = "LITMUS_MARKER",
        default_value = DefaultFilter::DEFAULT_MARKER
    )]
    pub marker: String,
}

impl Args {
    /// Turn the selection flags into the filter for the run.
    pub fn filter(&self) -> Result<DefaultFilter, ConfigError> {
        let unmarked: Vec<String> = self
            .tests
            .iter()
            .filter(|name| !name.starts_with(self.marker.as_str()))
            .cloned()
            .collect();
        if !unmarked.is_empty() {
            return Err(ConfigError::MissingMarker {
                marker: self.marker.clone(),
                names: unmarked,
            });
        }

        let selection = Selection::new(self.tests.iter().cloned(), self.test_prefixes.iter().cloned())?;
        Ok(DefaultFilter::new(selection).with_marker(self.marker.clone()))
    }
}

/// Parse the process arguments, run the tests and return the exit status.
///
/// Logging goes to stderr and is configured through `RUST_LOG`. An already
/// installed subscriber is left alone.
pub fn main(registry: &Registry) -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    run_from(registry, env::args_os(), io::stdout())
}

/// Like [`main`], but with explicit arguments and output target.
///
/// The first argument is the program name, as with [`env::args_os`].
pub fn run_from<I, T, W>(registry: &Registry, args: I, target: W) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: io::Write,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(err) => return usage_error(err),
    };
    let filter = match args.filter() {
        Ok(filter) => filter,
        Err(err) => return usage_error(config_error(err)),
    };

    let harness = crate::harness(registry)
        .with_filter(filter)
        .with_formatter(PlainFormatter::new(target));

    if args.list {
        log_fmt_errors(harness.list());
        return ExitCode::SUCCESS;
    }

    let report = harness.run();
    let exit_code = report.exit_code();
    log_fmt_errors(report.fmt_errors);
    exit_code
}

fn config_error(err: ConfigError) -> clap::Error {
    let kind = match err {
        ConfigError::ConflictingFilters => ErrorKind::ArgumentConflict,
        ConfigError::MissingMarker { .. } => ErrorKind::ValueValidation,
    };
    Args::command().error(kind, err)
}

fn usage_error(err: clap::Error) -> ExitCode {
    let _ = err.print();
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(USAGE_ERROR))
}

fn log_fmt_errors<E: Display>(fmt_errors: impl IntoIterator<Item = (&'static str, E)>) {
    for (hook, err) in fmt_errors {
        warn!(hook, error = %err, "could not write test output");
    }
}
