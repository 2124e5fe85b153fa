use std::{
    io,
    sync::{Arc, Mutex},
};

use crate::{
    TestHarness, filter::NoFilter, formatter::NoFormatter, registry::Registry, test::Test,
};

macro_rules! test_case {
    {name: $name:expr, func: $func:expr $(,)?} => {
        $crate::test::Test::new($name, $crate::test::TestFnHandle::from_sync($func))
    };
    {name: $name:expr, async_func: $func:expr $(,)?} => {
        $crate::test::Test::new($name, $crate::test::TestFnHandle::from_async($func))
    };
}

pub(crate) use test_case;

pub fn registry_of<const N: usize>(tests: [Test; N]) -> Registry {
    let mut registry = Registry::new();
    for test in tests {
        registry.insert(test).unwrap();
    }
    registry
}

pub fn harness(registry: &Registry) -> TestHarness<'_, NoFilter, NoFormatter> {
    TestHarness {
        registry,
        filter: NoFilter,
        formatter: NoFormatter,
    }
}

/// A cloneable writer, so output can be inspected after the formatter that
/// wrote it was moved into a harness.
#[derive(Debug, Clone, Default)]
pub struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Buffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
