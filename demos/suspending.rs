use std::{cell::Cell, process::ExitCode, rc::Rc, time::Duration};

use litmus::{assertion::*, registry::Registry};
use tokio::time::sleep;

async fn test_sleeps() -> AssertResult {
    for _ in 0..3 {
        sleep(Duration::from_millis(10)).await;
    }
    assert_true(true)
}

async fn test_spawns_local_work() -> AssertResult {
    let handle = tokio::task::spawn_local(async { 21 * 2 });
    let value = handle.await.unwrap_or_default();
    assert_equal(value, 42)
}

fn test_sync_neighbour() -> AssertResult {
    assert_false(false)
}

fn main() -> ExitCode {
    let counter = Rc::new(Cell::new(0));
    let mut registry = Registry::new();

    let result = registry
        .register_async("test_sleeps", test_sleeps)
        .and_then(|registry| registry.register_async("test_spawns_local_work", test_spawns_local_work))
        .and_then(|registry| registry.register("test_sync_neighbour", test_sync_neighbour))
        .and_then(|registry| {
            registry.register_async("test_counts", move || {
                let counter = Rc::clone(&counter);
                async move {
                    counter.set(counter.get() + 1);
                    tokio::task::yield_now().await;
                    assert_equal(counter.get(), 1)
                }
            })
        });
    if let Err(err) = result {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    litmus::cli::main(&registry)
}
