use std::io;

use crate::formatter::*;

/// Plain text output, one progress line per test.
///
/// ```text
/// test_a - ok
/// test_b - SKIPPED
/// test_c - FAILED
///
/// *************************
/// **** Failure Details ****
/// *************************
///
/// test_c - FAILED
/// litmus::assertion::AssertionFailure - "x"
///
/// ```
///
/// The test name is written and flushed before the body runs, so a hanging
/// test is visible while it hangs. The failure section only appears when at
/// least one test failed.
#[derive(Debug)]
pub struct PlainFormatter<W: io::Write> {
    target: W,
}

impl Default for PlainFormatter<io::Stdout> {
    fn default() -> Self {
        Self {
            target: io::stdout(),
        }
    }
}

impl<W: io::Write> PlainFormatter<W> {
    pub fn new(target: W) -> Self {
        Self { target }
    }

    pub fn with_target<WithTarget: io::Write>(
        self,
        with_target: WithTarget,
    ) -> PlainFormatter<WithTarget> {
        PlainFormatter {
            target: with_target,
        }
    }

    pub fn into_target(self) -> W {
        self.target
    }
}

impl<W: io::Write> TestFormatter for PlainFormatter<W> {
    type Error = io::Error;

    fn fmt_test_start(&mut self, data: FmtTestStart<'_>) -> io::Result<()> {
        write!(self.target, "{}", data.name)?;
        self.target.flush()
    }

    fn fmt_test_outcome(&mut self, data: FmtTestOutcome<'_, '_>) -> io::Result<()> {
        writeln!(self.target, " - {}", data.outcome.status.label())?;
        self.target.flush()
    }

    fn fmt_run_outcomes(&mut self, data: FmtRunOutcomes<'_, '_>) -> io::Result<()> {
        let mut failures = data.failures().peekable();
        if failures.peek().is_none() {
            return Ok(());
        }

        writeln!(self.target)?;
        writeln!(self.target, "*************************")?;
        writeln!(self.target, "**** Failure Details ****")?;
        writeln!(self.target, "*************************")?;
        writeln!(self.target)?;
        for (name, failure) in failures {
            writeln!(self.target, "{name} - FAILED")?;
            writeln!(self.target, "{failure}")?;
            writeln!(self.target)?;
        }
        self.target.flush()
    }
}

impl<W: io::Write> TestListFormatter for PlainFormatter<W> {
    type Error = io::Error;

    fn fmt_list_test(&mut self, data: FmtListTest<'_>) -> io::Result<()> {
        match data.is_async {
            true => writeln!(self.target, "{}: async test", data.name),
            false => writeln!(self.target, "{}: test", data.name),
        }
    }

    fn fmt_end_listing(&mut self, data: FmtEndListing) -> io::Result<()> {
        match data.listed {
            1 => writeln!(self.target, "\n1 test")?,
            count => writeln!(self.target, "\n{count} tests")?,
        }
        self.target.flush()
    }
}
