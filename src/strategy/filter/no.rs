use crate::{
    filter::{FilteredTests, TestFilter},
    registry::Registry,
};

/// A [`TestFilter`] that keeps every registered test.
///
/// The marker prefix is not checked, so helpers are included as well. Tests are
/// still sorted by name and no tests are counted as filtered out.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct NoFilter;

impl NoFilter {
    pub fn new() -> Self {
        Self
    }
}

impl TestFilter for NoFilter {
    fn filter<'t>(&self, registry: &'t Registry) -> FilteredTests<'t> {
        let mut tests: Vec<_> = registry.iter().collect();
        tests.sort_by(|a, b| a.name.cmp(&b.name));
        FilteredTests {
            tests,
            filtered_out: 0,
        }
    }
}
