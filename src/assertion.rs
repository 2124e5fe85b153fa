//! Assertion helpers for test bodies.
//!
//! Every helper checks a single condition and returns an
//! [`AssertionFailure`] with a descriptive message when the condition does not
//! hold, so test bodies can chain them with `?`. None of them has side effects.
//!
//! The raise helpers ([`assert_raises`], [`assert_async_raises`]) return a
//! [`TestError`] instead, because an error of an unexpected kind (or a skip)
//! has to keep flowing out of the test body untouched.

use std::{
    any::{Any, TypeId, type_name},
    error::Error as StdError,
    fmt::Debug,
    future::Future,
};

use thiserror::Error;

use crate::{Raised, TestError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionFailure {
    #[error("{0}")]
    Failed(String),

    #[error(transparent)]
    DidNotRaise(#[from] DidNotRaise),
}

impl AssertionFailure {
    pub fn is_did_not_raise(&self) -> bool {
        matches!(self, AssertionFailure::DidNotRaise(_))
    }
}

/// The expected error never showed up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{expected} not raised")]
pub struct DidNotRaise {
    pub expected: &'static str,
}

pub type AssertResult<T = ()> = Result<T, AssertionFailure>;

fn failed(message: String) -> AssertionFailure {
    AssertionFailure::Failed(message)
}

pub fn assert_true(x: bool) -> AssertResult {
    match x {
        true => Ok(()),
        false => Err(failed(format!("{x} is not True"))),
    }
}

pub fn assert_false(x: bool) -> AssertResult {
    match x {
        false => Ok(()),
        true => Err(failed(format!("{x} is not False"))),
    }
}

pub fn assert_none<T: Debug>(x: &Option<T>) -> AssertResult {
    match x {
        None => Ok(()),
        Some(_) => Err(failed(format!("{x:?} is not None"))),
    }
}

pub fn assert_equal<R, E>(result: R, expected: E) -> AssertResult
where
    R: PartialEq<E> + Debug,
    E: Debug,
{
    if result != expected {
        return Err(failed(format!(
            "Expected ({expected:?}), got ({result:?})"
        )));
    }
    Ok(())
}

/// Check that `v` is exactly of type `T`.
///
/// ```
/// use litmus::assertion::assert_is_instance;
///
/// assert!(assert_is_instance::<Vec<u8>>(&vec![1u8]).is_ok());
/// assert!(assert_is_instance::<Vec<u8>>(&"no").is_err());
/// ```
pub fn assert_is_instance<T: Any>(v: &(impl Any + Debug)) -> AssertResult {
    if (v as &dyn Any).is::<T>() {
        return Ok(());
    }
    Err(not_of_type(v, type_name::<T>()))
}

/// Check that `v` belongs to the family of types described by `K`.
pub fn assert_is_kind<K: TypeClass>(v: &(impl Any + Debug)) -> AssertResult {
    if K::contains((v as &dyn Any).type_id()) {
        return Ok(());
    }
    Err(not_of_type(v, K::NAME))
}

fn not_of_type(v: &impl Debug, name: &str) -> AssertionFailure {
    failed(format!("Value ({v:?}) is not of type ({name})"))
}

pub fn assert_is_int(v: &(impl Any + Debug)) -> AssertResult {
    assert_is_kind::<kind::Int>(v)
}

pub fn assert_is_float(v: &(impl Any + Debug)) -> AssertResult {
    assert_is_kind::<kind::Float>(v)
}

pub fn assert_is_decimal(v: &(impl Any + Debug)) -> AssertResult {
    assert_is_kind::<kind::Decimal>(v)
}

pub fn assert_is_string(v: &(impl Any + Debug)) -> AssertResult {
    assert_is_kind::<kind::Str>(v)
}

pub fn assert_is_bytes(v: &(impl Any + Debug)) -> AssertResult {
    assert_is_kind::<kind::Bytes>(v)
}

/// A named family of concrete types, checked by [`TypeId`].
///
/// Rust has no subtyping between concrete types, so the type shorthands
/// match against a fixed set of representations instead.
pub trait TypeClass {
    const NAME: &'static str;

    fn contains(id: TypeId) -> bool;
}

pub mod kind {
    use std::{any::TypeId, borrow::Cow};

    use super::TypeClass;

    macro_rules! type_class {
        ($(#[$attr:meta])* $class:ident = $label:literal: [$($ty:ty),* $(,)?]) => {
            $(#[$attr])*
            #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
            pub struct $class;

            impl TypeClass for $class {
                const NAME: &'static str = $label;

                fn contains(id: TypeId) -> bool {
                    [$(TypeId::of::<$ty>()),*].contains(&id)
                }
            }
        };
    }

    type_class!(
        /// All primitive integers.
        Int = "int": [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]
    );
    type_class!(Float = "float": [f32, f64]);
    type_class!(Decimal = "decimal": [rust_decimal::Decimal]);
    type_class!(
        /// Owned and static string representations.
        Str = "str": [String, &'static str, Box<str>, Cow<'static, str>]
    );
    type_class!(
        Bytes = "bytes": [Vec<u8>, &'static [u8], Box<[u8]>, Cow<'static, [u8]>]
    );
}

/// Run `f` and expect it to fail with an error of type `E`.
///
/// Returns the error when it matches. An error of any other type keeps
/// propagating as a [`TestError`], and a normal return is a
/// [`DidNotRaise`] failure, reported under the `DidNotRaise` kind.
///
/// ```
/// use std::num::ParseIntError;
///
/// use litmus::{TestError, assertion::assert_raises};
///
/// fn test_parse() -> Result<(), TestError> {
///     let err = assert_raises::<ParseIntError, _, _>(|| "x".parse::<i32>())?;
///     assert_eq!(err.to_string(), "invalid digit found in string");
///     Ok(())
/// }
/// # test_parse().unwrap();
/// ```
pub fn assert_raises<E, T, X>(f: impl FnOnce() -> Result<T, X>) -> Result<E, TestError>
where
    E: StdError + Send + Sync + 'static,
    X: Into<TestError>,
{
    expect_raised(f())
}

/// The suspending twin of [`assert_raises`].
///
/// The future produced by `f` is awaited to completion before its result is
/// classified.
pub async fn assert_async_raises<E, T, X, Fut>(f: impl FnOnce() -> Fut) -> Result<E, TestError>
where
    E: StdError + Send + Sync + 'static,
    X: Into<TestError>,
    Fut: Future<Output = Result<T, X>>,
{
    expect_raised(f().await)
}

fn expect_raised<E, T, X>(result: Result<T, X>) -> Result<E, TestError>
where
    E: StdError + Send + Sync + 'static,
    X: Into<TestError>,
{
    match result {
        Ok(_) => {
            let failure = AssertionFailure::from(DidNotRaise {
                expected: type_name::<E>(),
            });
            Err(Raised::with_kind(type_name::<DidNotRaise>(), failure).into())
        }
        Err(err) => match err.into() {
            TestError::Raised(raised) => raised.downcast::<E>().map_err(TestError::Raised),
            other => Err(other),
        },
    }
}
