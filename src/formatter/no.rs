use crate::formatter::*;

/// A formatter that produces no output.
///
/// `NoFormatter` implements all formatter traits but discards every event.
/// This is useful when the caller only cares about the returned report.
#[derive(Debug, Default, Clone)]
pub struct NoFormatter;

impl TestFormatter for NoFormatter {
    type Error = ();
}

impl TestListFormatter for NoFormatter {
    type Error = ();
}
