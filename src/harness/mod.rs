use std::io;

pub use test::TestHarness;

use crate::{filter::DefaultFilter, formatter::PlainFormatter, registry::Registry};

/// The default harness: marker discovery, name ordering and plain output on
/// stdout.
pub fn harness(registry: &Registry) -> TestHarness<'_, DefaultFilter, PlainFormatter<io::Stdout>> {
    TestHarness {
        registry,
        filter: DefaultFilter::default(),
        formatter: PlainFormatter::default(),
    }
}

/// Tag a formatter call with the name of the hook it invoked.
macro_rules! named_fmt {
    ($formatter:ident.$method:ident($($arg:expr),* $(,)?)) => {
        (::std::stringify!($method), $formatter.$method($($arg),*))
    };
}

pub(crate) use named_fmt;

pub(crate) trait FmtErrors<E> {
    fn push_on_error(&mut self, named: (&'static str, Result<(), E>));
}

impl<E> FmtErrors<E> for Vec<(&'static str, E)> {
    fn push_on_error(&mut self, (name, result): (&'static str, Result<(), E>)) {
        if let Err(err) = result {
            self.push((name, err));
        }
    }
}
