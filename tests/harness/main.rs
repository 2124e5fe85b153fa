use std::{cell::RefCell, num::ParseIntError, process::ExitCode, rc::Rc, time::Duration};

use litmus::{
    TestError,
    assertion::*,
    cli,
    filter::{DefaultFilter, Selection},
    formatter::{FmtTestOutcome, PlainFormatter, TestFormatter},
    outcome::TestStatus,
    registry,
    registry::Registry,
    skip,
};
use pretty_assertions::assert_eq;
use regex::Regex;

mod lib;
use lib::Buffer;

fn test_a() {}

fn test_b() -> Result<(), TestError> {
    skip("not on this machine")?;
    Ok(())
}

fn test_c() -> AssertResult {
    Err(AssertionFailure::Failed("x".into()))
}

fn helper() {
    panic!("helpers are never discovered");
}

fn scenario() -> Registry {
    registry![test_c, helper, test_b, test_a].unwrap()
}

fn run(registry: &Registry, args: &[&str]) -> (ExitCode, String) {
    let stdout = Buffer::default();
    let exit_code = cli::run_from(registry, ["litmus"].iter().chain(args), stdout.clone());
    (exit_code, stdout.try_to_string().unwrap())
}

#[test]
fn full_run_reports_the_failure_digest() {
    let (exit_code, stdout) = run(&scenario(), &[]);

    let expected = r#"test_a - ok
test_b - SKIPPED
test_c - FAILED

*************************
**** Failure Details ****
*************************

test_c - FAILED
litmus::assertion::AssertionFailure - "x"

"#;
    assert_eq!(stdout, expected);
    assert_eq!(exit_code, ExitCode::FAILURE);
}

#[test]
fn explicit_name_runs_only_that_test() {
    let (exit_code, stdout) = run(&scenario(), &["--test", "test_a"]);
    assert_eq!(stdout, "test_a - ok\n");
    assert_eq!(exit_code, ExitCode::SUCCESS);
}

#[test]
fn unknown_names_are_left_out() {
    let (exit_code, stdout) = run(&scenario(), &["--test", "test_b", "--test", "test_zzz"]);
    assert_eq!(stdout, "test_b - SKIPPED\n");
    assert_eq!(exit_code, ExitCode::SUCCESS);
}

#[test]
fn prefix_selection() {
    let mut registry = scenario();
    registry
        .register("test_net_up", || ())
        .unwrap()
        .register("test_net_down", || assert_true(false))
        .unwrap();

    let (exit_code, stdout) = run(&registry, &["--test-prefix", "test_net"]);
    let expected = r#"test_net_down - FAILED
test_net_up - ok

*************************
**** Failure Details ****
*************************

test_net_down - FAILED
litmus::assertion::AssertionFailure - "false is not True"

"#;
    assert_eq!(stdout, expected);
    assert_eq!(exit_code, ExitCode::FAILURE);
}

#[test]
fn usage_errors_abort_before_running() {
    let (exit_code, stdout) = run(&scenario(), &["--test", "test_a", "--test-prefix", "test_"]);
    assert_eq!(stdout, "");
    assert_eq!(exit_code, ExitCode::from(cli::USAGE_ERROR));

    let (exit_code, stdout) = run(&scenario(), &["--test", "helper"]);
    assert_eq!(stdout, "");
    assert_eq!(exit_code, ExitCode::from(cli::USAGE_ERROR));
}

#[test]
fn custom_marker() {
    let (exit_code, stdout) = run(&scenario(), &["--marker", "help", "--list"]);
    assert_eq!(stdout, "helper: test\n\n1 test\n");
    assert_eq!(exit_code, ExitCode::SUCCESS);
}

#[test]
fn progress_lines_have_a_fixed_shape() {
    let mut registry = Registry::new();
    registry
        .register("test_parse", || -> Result<(), TestError> {
            let err = assert_raises::<ParseIntError, _, _>(|| "ten".parse::<u8>())?;
            assert_equal(err.to_string(), "invalid digit found in string")?;
            Ok(())
        })
        .unwrap()
        .register("test_parse_ok", || -> Result<(), TestError> {
            assert_raises::<ParseIntError, _, _>(|| "10".parse::<u8>())?;
            Ok(())
        })
        .unwrap()
        .register("test_kinds", || -> AssertResult {
            assert_is_int(&1u16)?;
            assert_is_string(&"s")?;
            assert_none(&None::<u8>)
        })
        .unwrap();

    let (_, stdout) = run(&registry, &[]);
    let (progress, digest) = stdout.split_once("\n\n").unwrap();

    let line = Regex::new(r"^test_\w+ - (ok|SKIPPED|FAILED)$").unwrap();
    for progress_line in progress.lines() {
        assert!(line.is_match(progress_line), "{progress_line:?}");
    }

    let did_not_raise = Regex::new(
        r#"(?m)^test_parse_ok - FAILED\nlitmus::assertion::DidNotRaise - ".*ParseIntError not raised"$"#,
    )
    .unwrap();
    assert!(did_not_raise.is_match(digest), "{digest}");
}

#[test]
fn suspending_tests_run_one_after_another() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = Registry::new();

    let first = Rc::clone(&log);
    registry
        .register_async("test_first", move || {
            let log = Rc::clone(&first);
            async move {
                log.borrow_mut().push("first start");
                for _ in 0..3 {
                    tokio::time::sleep(Duration::from_millis(2)).await;
                    tokio::task::yield_now().await;
                }
                log.borrow_mut().push("first end");
            }
        })
        .unwrap();

    let second = Rc::clone(&log);
    registry
        .register_async("test_second", move || {
            let log = Rc::clone(&second);
            async move {
                log.borrow_mut().push("second start");
                tokio::task::yield_now().await;
                log.borrow_mut().push("second end");
                assert_equal(log.borrow().len(), 4)
            }
        })
        .unwrap();

    let (exit_code, stdout) = run(&registry, &[]);
    assert_eq!(stdout, "test_first - ok\ntest_second - ok\n");
    assert_eq!(exit_code, ExitCode::SUCCESS);
    assert_eq!(
        *log.borrow(),
        ["first start", "first end", "second start", "second end"]
    );
}

#[test]
fn harness_can_be_assembled_by_hand() {
    #[derive(Default)]
    struct Collect(Vec<String>);

    impl TestFormatter for Collect {
        type Error = std::convert::Infallible;

        fn fmt_test_outcome(&mut self, data: FmtTestOutcome<'_, '_>) -> Result<(), Self::Error> {
            self.0.push(format!("{}={}", data.name, data.outcome.status.label()));
            Ok(())
        }
    }

    let registry = scenario();
    let report = litmus::harness(&registry)
        .with_filter(DefaultFilter::new(Selection::prefixes(["test_b", "test_c"])))
        .with_formatter(Collect::default())
        .run();

    assert_eq!(report.filtered_out, 1);
    assert_eq!(report.skipped(), 1);
    let digest = report.failure_digest();
    assert_eq!(digest.len(), 1);
    assert_eq!(digest[0].0, "test_c");
    assert_eq!(digest[0].1.message, "x");
    assert_eq!(report.exit_code(), ExitCode::FAILURE);
    assert!(matches!(
        report.outcomes[0].1.status,
        TestStatus::Skipped { .. }
    ));

    let quiet = litmus::harness(&registry)
        .with_formatter(PlainFormatter::new(Buffer::default()))
        .with_filter(DefaultFilter::new(Selection::names(["test_a"])))
        .run();
    assert_eq!(quiet.exit_code(), ExitCode::SUCCESS);
}
