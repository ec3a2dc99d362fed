#![allow(dead_code)]

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus, Output};

pub const BIN: &str = env!("CARGO_BIN_EXE_crash_trigger");

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Normal exit, or on Windows an unhandled exception code.
    Exited(i32),
    /// Killed by this signal number.
    Signaled(i32),
}

pub fn termination(status: ExitStatus) -> Termination {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return Termination::Signaled(signal);
        }
    }
    match status.code() {
        Some(code) => Termination::Exited(code),
        None => panic!("no exit code or signal for {status:?}"),
    }
}

/// What a memory access violation looks like from the parent.
pub fn access_violation() -> Termination {
    #[cfg(unix)]
    {
        Termination::Signaled(libc::SIGSEGV)
    }
    #[cfg(windows)]
    {
        // STATUS_ACCESS_VIOLATION
        Termination::Exited(0xC000_0005_u32 as i32)
    }
}

pub fn command(bin: impl AsRef<OsStr>) -> Command {
    let mut command = Command::new(bin);
    command.env_remove("CRASH_TRIGGER_KIND").env_remove("RUST_LOG");
    command
}

pub fn run(args: &[&str]) -> Output {
    run_binary(BIN, args)
}

pub fn run_binary(bin: impl AsRef<Path>, args: &[&str]) -> Output {
    command(bin.as_ref())
        .args(args)
        .output()
        .unwrap_or_else(|err| panic!("failed to run {}: {err}", bin.as_ref().display()))
}
