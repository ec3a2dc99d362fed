//! Memory access violation on demand.

use std::hint;
use std::process;
use std::ptr;

/// Address inside the zero page, which no supported platform maps.
///
/// Not null: debug builds check raw pointer accesses for null and would
/// abort with SIGABRT before touching memory.
const INVALID_ADDRESS: usize = 0x10;

/// Crash the process with a memory access violation.
///
/// On unix the process receives `SIGSEGV`, on Windows it raises
/// `STATUS_ACCESS_VIOLATION`. Nothing is caught here; whatever handler the
/// environment installed (a crash reporter, a debugger, the default
/// disposition) sees the fault.
#[inline(never)]
pub fn crash() -> ! {
    let target = hint::black_box(INVALID_ADDRESS as *mut u32);

    // SAFETY: none. Faulting here is the point of the function.
    unsafe {
        let value = ptr::read_volatile(target);
        ptr::write_volatile(target, value.wrapping_add(1));
    }

    // Only reached if page zero is mapped.
    process::abort()
}
