//! Test discovery for litmus.
//!
//! A filter decides which registered tests take part in a run and in which
//! order. Tests that do not make it through the filter are removed from the run
//! entirely: they are never started and never reported.
//!
//! The default filter implements the usual workflow: only names carrying the
//! marker prefix (`test_` by default) are discoverable, an optional
//! [`Selection`] narrows them down further, and the result is sorted by name so
//! the run order never depends on registration order.
//!
//! Implement [`TestFilter`] to define a different discovery strategy.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::{registry::Registry, test::Test};

mod no;
pub use no::*;

mod default;
pub use default::*;

/// The result of applying a [`TestFilter`].
#[derive(Debug)]
pub struct FilteredTests<'t> {
    /// The tests that are included in the run, in run order.
    pub tests: Vec<&'t Test>,

    /// The number of discoverable tests that did not match the selection.
    pub filtered_out: usize,
}

/// A strategy for selecting which tests are included in a test run.
pub trait TestFilter {
    /// Filter the given registry.
    ///
    /// The returned tests must be references into `registry` and must be in
    /// the order they are supposed to run.
    fn filter<'t>(&self, registry: &'t Registry) -> FilteredTests<'t>;
}

/// Invalid filter configuration, detected before any test runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("explicit test names and test prefixes cannot be combined")]
    ConflictingFilters,

    #[error("test names are expected to start with {marker:?}, got: {names:?}")]
    MissingMarker { marker: String, names: Vec<String> },
}

/// Narrows the discoverable tests down to the ones the caller asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every discoverable test.
    #[default]
    All,

    /// Only tests with exactly these names.
    Names(BTreeSet<String>),

    /// Only tests whose name starts with any of these prefixes.
    Prefixes(Vec<String>),
}

impl Selection {
    /// Build a selection from explicit names and prefixes.
    ///
    /// Empty inputs count as absent. Supplying both is a
    /// [`ConfigError::ConflictingFilters`].
    pub fn new<N, P>(names: N, prefixes: P) -> Result<Self, ConfigError>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        let prefixes: Vec<String> = prefixes.into_iter().map(Into::into).collect();
        match (names.is_empty(), prefixes.is_empty()) {
            (true, true) => Ok(Selection::All),
            (false, true) => Ok(Selection::Names(names)),
            (true, false) => Ok(Selection::Prefixes(prefixes)),
            (false, false) => Err(ConfigError::ConflictingFilters),
        }
    }

    pub fn names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Selection::Names(names.into_iter().map(Into::into).collect())
    }

    pub fn prefixes<I>(prefixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Selection::Prefixes(prefixes.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Names(names) => names.contains(name),
            Selection::Prefixes(prefixes) => {
                prefixes.iter().any(|prefix| name.starts_with(prefix.as_str()))
            }
        }
    }
}
