//! Run with `cargo run --example basic -- --test-prefix test_math`.

use std::{collections::HashMap, num::ParseIntError, process::ExitCode};

use litmus::{TestError, assertion::*, registry, skip};

fn test_math_addition() -> AssertResult {
    assert_equal(2 + 2, 4)
}

fn test_math_parse() -> Result<(), TestError> {
    let err = assert_raises::<ParseIntError, _, _>(|| "four".parse::<i32>())?;
    assert_equal(err.to_string(), "invalid digit found in string")?;
    Ok(())
}

fn test_lookup() -> AssertResult {
    let ages = HashMap::from([("ada", 36)]);
    assert_none(&ages.get("grace"))?;
    assert_is_int(&ages["ada"])
}

fn test_network() -> Result<(), TestError> {
    skip("no network in the demo")?;
    Ok(())
}

fn test_broken() -> AssertResult {
    assert_equal("litmus", "paper")
}

// Registered, but not a test.
fn warm_cache() {}

fn main() -> ExitCode {
    let registry = match registry![
        test_math_addition,
        test_math_parse,
        test_lookup,
        test_network,
        test_broken,
        warm_cache,
    ] {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    litmus::cli::main(&registry)
}
