//! The explicit collection of named tests a run is built from.
//!
//! A [`Registry`] is assembled by the caller and only ever borrowed by the
//! harness. Names are unique. Helpers whose names lack the marker prefix may
//! live next to tests; discovery simply never picks them up.

use std::{borrow::Cow, collections::HashSet, future::Future, slice};

use thiserror::Error;
use tracing::trace;

use crate::test::{Test, TestFnHandle, TestResult};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a test named {0:?} is already registered")]
    DuplicateName(String),
}

#[derive(Debug, Default)]
pub struct Registry {
    tests: Vec<Test>,
    names: HashSet<Cow<'static, str>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, test: Test) -> Result<&mut Self, RegistryError> {
        if !self.names.insert(test.name.clone()) {
            return Err(RegistryError::DuplicateName(test.name.into_owned()));
        }
        trace!(test = %test.name, is_async = test.is_async(), "registered test");
        self.tests.push(test);
        Ok(self)
    }

    /// Register a test that runs to completion when called.
    pub fn register<F, T>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        f: F,
    ) -> Result<&mut Self, RegistryError>
    where
        F: Fn() -> T + 'static,
        T: Into<TestResult>,
    {
        self.insert(Test::new(name, TestFnHandle::from_sync(f)))
    }

    /// Register a test whose body suspends and has to be driven on the scheduler.
    pub fn register_async<F, Fut, T>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        f: F,
    ) -> Result<&mut Self, RegistryError>
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = T> + 'static,
        T: Into<TestResult> + 'static,
    {
        self.insert(Test::new(name, TestFnHandle::from_async(f)))
    }

    pub fn get(&self, name: &str) -> Option<&Test> {
        self.tests.iter().find(|test| test.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate the tests in registration order.
    pub fn iter(&self) -> slice::Iter<'_, Test> {
        self.tests.iter()
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

impl<'r> IntoIterator for &'r Registry {
    type Item = &'r Test;
    type IntoIter = slice::Iter<'r, Test>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build a [`Registry`] from functions in scope, naming each test after its
/// function. Prefix a function with `async` when it is an `async fn`.
///
/// ```
/// use litmus::{assertion::assert_equal, registry};
///
/// fn test_math() -> litmus::assertion::AssertResult {
///     assert_equal(2 + 2, 4)
/// }
///
/// async fn test_later() {}
///
/// let registry = registry![test_math, async test_later].unwrap();
/// assert!(registry.contains("test_math"));
/// assert!(registry.get("test_later").unwrap().is_async());
/// ```
#[macro_export]
macro_rules! registry {
    (@register $registry:ident;) => {};
    (@register $registry:ident; async $test:ident $(, $($rest:tt)*)?) => {
        $registry.register_async(::std::stringify!($test), $test)?;
        $crate::registry!(@register $registry; $($($rest)*)?);
    };
    (@register $registry:ident; $test:ident $(, $($rest:tt)*)?) => {
        $registry.register(::std::stringify!($test), $test)?;
        $crate::registry!(@register $registry; $($($rest)*)?);
    };
    ($($body:tt)*) => {{
        let build = || -> ::std::result::Result<
            $crate::registry::Registry,
            $crate::registry::RegistryError,
        > {
            let mut registry = $crate::registry::Registry::new();
            $crate::registry!(@register registry; $($body)*);
            ::std::result::Result::Ok(registry)
        };
        build()
    }};
}
