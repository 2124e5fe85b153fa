use std::{
    any::type_name,
    borrow::Cow,
    error::Error,
    fmt::{self, Display},
};

pub type BoxedError = Box<dyn Error + Send + Sync + 'static>;

/// The signal a test body raises to stop early without failing.
///
/// `Skip` is intentionally not an [`Error`], so it can never be mistaken for a
/// failure by code that only deals in errors. Test bodies usually produce it
/// through [`skip`]:
///
/// ```
/// use litmus::{TestError, skip};
///
/// fn test_network() -> Result<(), TestError> {
///     skip("no network in this environment")?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skip {
    pub reason: Option<Cow<'static, str>>,
}

impl Skip {
    pub const fn new() -> Self {
        Self { reason: None }
    }

    pub fn because(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}

impl Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "skipped: {reason}"),
            None => f.write_str("skipped"),
        }
    }
}

/// Return a [`Skip`] signal, meant to be used with `?`.
pub fn skip(reason: impl Into<Cow<'static, str>>) -> Result<(), Skip> {
    Err(Skip::because(reason))
}

/// An error raised by a test body, together with the name of its type.
#[derive(Debug)]
pub struct Raised {
    kind: &'static str,
    error: BoxedError,
}

impl Raised {
    pub fn new<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self {
            kind: type_name::<E>(),
            error: Box::new(error),
        }
    }

    /// Like [`Raised::new`], but reported under `kind` instead of the type
    /// name of `E`.
    pub fn with_kind<E: Error + Send + Sync + 'static>(kind: &'static str, error: E) -> Self {
        Self {
            kind,
            error: Box::new(error),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn is<E: Error + 'static>(&self) -> bool {
        self.error.is::<E>()
    }

    /// Try to recover the concrete error, handing `self` back on a mismatch.
    pub fn downcast<E: Error + 'static>(self) -> Result<E, Self> {
        match self.error.downcast::<E>() {
            Ok(error) => Ok(*error),
            Err(error) => Err(Self {
                kind: self.kind,
                error,
            }),
        }
    }
}

impl Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.error)
    }
}

/// Everything that can leave a test body other than a normal return.
///
/// Any [`Error`] converts into [`TestError::Raised`] through `?`, while a
/// [`Skip`] converts into [`TestError::Skip`]. The two never share a channel.
#[derive(Debug)]
#[non_exhaustive]
pub enum TestError {
    Skip(Skip),
    Raised(Raised),
}

impl TestError {
    pub fn is_skip(&self) -> bool {
        matches!(self, TestError::Skip(_))
    }

    pub fn is_raised(&self) -> bool {
        matches!(self, TestError::Raised(_))
    }
}

impl<E> From<E> for TestError
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        TestError::Raised(Raised::new(error))
    }
}

impl From<Skip> for TestError {
    fn from(skip: Skip) -> Self {
        TestError::Skip(skip)
    }
}

impl From<Raised> for TestError {
    fn from(raised: Raised) -> Self {
        TestError::Raised(raised)
    }
}

impl Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestError::Skip(skip) => Display::fmt(skip, f),
            TestError::Raised(raised) => Display::fmt(raised, f),
        }
    }
}
