//! Deliberately crash the current process.
//!
//! Meant for exercising crash reporters and error tracking pipelines: a
//! harness spawns a process, calls [`crash`] (or [`cause_crash`] for the
//! other kinds) and checks what the reporter saw. Nothing here handles or
//! reports the crash.

use std::panic;
use std::thread;

mod error;
mod fault;
pub mod ffi;
mod kind;

pub use error::ParseCrashKindError;
pub use fault::crash;
pub use kind::CrashKind;

/// Name of the thread that panics for [`CrashKind::PanicBackgroundThread`].
pub const BACKGROUND_THREAD_NAME: &str = "crash-trigger-background";

/// Cause the requested crash. Never returns.
pub fn cause_crash(kind: CrashKind) -> ! {
    match kind {
        CrashKind::Segfault => crash(),
        CrashKind::Panic => panic!("{}", deliberate_panic_message(kind)),
        CrashKind::PanicBackgroundThread => panic_on_background_thread(kind),
    }
}

fn deliberate_panic_message(kind: CrashKind) -> String {
    format!("This panic was caused deliberately by crash_trigger::cause_crash(CrashKind::{kind:?}).")
}

fn panic_on_background_thread(kind: CrashKind) -> ! {
    let message = deliberate_panic_message(kind);
    let spawned = thread::Builder::new()
        .name(BACKGROUND_THREAD_NAME.to_owned())
        .spawn(move || {
            panic!("{message}");
        });

    let handle = match spawned {
        Ok(handle) => handle,
        Err(err) => panic!("failed to spawn {BACKGROUND_THREAD_NAME}: {err}"),
    };
    let Err(payload) = handle.join() else {
        unreachable!("{BACKGROUND_THREAD_NAME} returned without panicking")
    };
    // The background thread already reported the panic; keep unwinding
    // here so the process dies from it.
    panic::resume_unwind(payload)
}
