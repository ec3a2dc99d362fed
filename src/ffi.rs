//! C entry points, for hosts that load the `cdylib` directly.
//!
//! The header lives in `include/crash_trigger.h` and is regenerated by the
//! build script.

/// Crash the calling process with a memory access violation.
///
/// Never returns.
#[no_mangle]
pub extern "C" fn crash() -> ! {
    crate::fault::crash()
}
