use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Runs `run`, returning the message it panicked with, or [`None`] if it returned normally.
/// Payloads that aren't strings produce an empty message.
#[allow(unused)]
pub(crate) fn panic_message<R>(run: impl FnOnce() -> R) -> Option<String> {
    let payload: Box<dyn Any + Send> = panic::catch_unwind(AssertUnwindSafe(run)).err()?;
    Some(match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => payload.downcast_ref::<&str>().map_or_else(String::new, |m| m.to_string()),
    })
}

/// Asserts that a block panics. With a second argument, also asserts that the panic message
/// contains that text, which is how the `throw`ing counterparts of `try_` methods are checked
/// against the error they report.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            $crate::util::panic::panic_message(|| $run).is_some(),
            "assertion failed to panic"
        );
    };
    ($run:block, $expected:literal) => {
        match $crate::util::panic::panic_message(|| $run) {
            Some(message) => assert!(
                message.contains($expected),
                "panicked with {message:?}, expected a message containing {:?}",
                $expected
            ),
            None => panic!("assertion failed to panic"),
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
