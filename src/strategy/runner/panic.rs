use std::{
    any::Any,
    panic::{self, PanicHookInfo},
};

use tracing::debug;

/// Convert a panic payload into a string.
///
/// This matches the common payload types produced by `panic!` (`&'static str` and `String`).
/// Other payload types are formatted as a generic placeholder.
pub fn payload_as_string(err: Box<dyn Any + Send + 'static>) -> String {
    err.downcast::<&'static str>()
        .map(|s| s.to_string())
        .or_else(|err| err.downcast::<String>().map(|s| *s))
        .unwrap_or_else(|_| String::from("Box<dyn Any>"))
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Replaces the process panic hook while tests run.
///
/// Panics inside test bodies are reported through the failure digest, so the
/// default hook printing to stderr would only interleave noise with the
/// progress lines. The replacement logs the panic location instead. The
/// previous hook is restored on drop.
pub struct PanicHookGuard(Option<PanicHook>);

impl PanicHookGuard {
    pub fn install() -> Self {
        let old_hook = panic::take_hook();

        panic::set_hook(Box::new(|panic_hook_info| {
            let location = panic_hook_info
                .location()
                .map(ToString::to_string)
                .unwrap_or_default();
            debug!(%location, "test body panicked");
        }));

        Self(Some(old_hook))
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        if let Some(old_hook) = self.0.take() {
            panic::set_hook(old_hook);
        }
    }
}
