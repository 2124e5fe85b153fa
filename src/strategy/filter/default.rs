use std::borrow::Cow;

use tracing::{debug, warn};

use crate::{
    filter::{FilteredTests, Selection, TestFilter},
    registry::Registry,
};

/// The discovery strategy of the default harness.
///
/// Keeps tests whose name starts with the marker prefix, narrows them down by
/// the [`Selection`] and sorts the result by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultFilter {
    marker: Cow<'static, str>,
    selection: Selection,
}

impl Default for DefaultFilter {
    fn default() -> Self {
        Self::new(Selection::All)
    }
}

impl DefaultFilter {
    pub const DEFAULT_MARKER: &'static str = "test_";

    pub fn new(selection: Selection) -> Self {
        Self {
            marker: Cow::Borrowed(Self::DEFAULT_MARKER),
            selection,
        }
    }

    pub fn with_marker(self, marker: impl Into<Cow<'static, str>>) -> Self {
        Self {
            marker: marker.into(),
            ..self
        }
    }

    pub fn with_selection(self, selection: Selection) -> Self {
        Self { selection, ..self }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_discoverable(&self, name: &str) -> bool {
        name.starts_with(self.marker.as_ref())
    }

    /// Explicitly selected names that do not match any discoverable test.
    pub fn unmatched_names<'s>(&'s self, registry: &Registry) -> Vec<&'s str> {
        let Selection::Names(names) = &self.selection else {
            return Vec::new();
        };

        names
            .iter()
            .map(String::as_str)
            .filter(|name| !(self.is_discoverable(name) && registry.contains(name)))
            .collect()
    }
}

impl TestFilter for DefaultFilter {
    fn filter<'t>(&self, registry: &'t Registry) -> FilteredTests<'t> {
        let mut tests = Vec::new();
        let mut filtered_out = 0;
        for test in registry {
            let name = test.name.as_ref();
            if !self.is_discoverable(name) {
                continue;
            }

            match self.selection.matches(name) {
                true => tests.push(test),
                false => filtered_out += 1,
            }
        }
        tests.sort_by(|a, b| a.name.cmp(&b.name));

        for name in self.unmatched_names(registry) {
            warn!(test = name, "selected test is not registered, ignoring it");
        }
        debug!(
            selected = tests.len(),
            filtered_out,
            marker = %self.marker,
            "discovered tests"
        );

        FilteredTests {
            tests,
            filtered_out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn names<'t>(filtered: &FilteredTests<'t>) -> Vec<&'t str> {
        filtered.tests.iter().map(|test| test.name.as_ref()).collect()
    }

    fn registry() -> Registry {
        registry_of([
            test_case! {name: "test_b", func: || ()},
            test_case! {name: "helper", func: || ()},
            test_case! {name: "test_a", func: || ()},
            test_case! {name: "test_net_up", async_func: || async {}},
            test_case! {name: "test_net_down", func: || ()},
        ])
    }

    #[test]
    fn discovers_marked_tests_in_name_order() {
        let registry = registry();
        let filtered = DefaultFilter::default().filter(&registry);

        assert_eq!(
            names(&filtered),
            ["test_a", "test_b", "test_net_down", "test_net_up"]
        );
        assert_eq!(filtered.filtered_out, 0);
    }

    #[test]
    fn explicit_names() {
        let registry = registry();
        let filter = DefaultFilter::new(Selection::names(["test_b", "test_missing", "helper"]));
        let filtered = filter.filter(&registry);

        assert_eq!(names(&filtered), ["test_b"]);
        assert_eq!(filtered.filtered_out, 3);
        assert_eq!(filter.unmatched_names(&registry), ["helper", "test_missing"]);
    }

    #[test]
    fn prefixes() {
        let registry = registry();
        let filter = DefaultFilter::new(Selection::prefixes(["test_net", "test_a"]));
        let filtered = filter.filter(&registry);

        assert_eq!(names(&filtered), ["test_a", "test_net_down", "test_net_up"]);
        assert_eq!(filtered.filtered_out, 1);
        assert!(filter.unmatched_names(&registry).is_empty());
    }

    #[test]
    fn custom_marker() {
        let registry = registry();
        let filtered = DefaultFilter::default()
            .with_marker("help")
            .filter(&registry);

        assert_eq!(names(&filtered), ["helper"]);
    }
}
