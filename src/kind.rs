//! The deliberate crashes this crate knows how to cause.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseCrashKindError;

/// Which crash [`cause_crash`](crate::cause_crash) produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrashKind {
    /// Memory access violation, see [`crash`](crate::crash).
    #[default]
    Segfault,
    /// Unhandled panic on the calling thread.
    Panic,
    /// Unhandled panic raised on a freshly spawned thread.
    PanicBackgroundThread,
}

impl CrashKind {
    pub const ALL: [CrashKind; 3] = [
        CrashKind::Segfault,
        CrashKind::Panic,
        CrashKind::PanicBackgroundThread,
    ];

    /// Canonical name, as accepted by [`FromStr`] and the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            CrashKind::Segfault => "segfault",
            CrashKind::Panic => "panic",
            CrashKind::PanicBackgroundThread => "panic-background-thread",
        }
    }
}

impl fmt::Display for CrashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrashKind {
    type Err = ParseCrashKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "segfault" | "native" | "sigsegv" => CrashKind::Segfault,
            "panic" | "managed" => CrashKind::Panic,
            "panic-background-thread" | "background" | "managed-background-thread" => {
                CrashKind::PanicBackgroundThread
            }
            _ => return Err(ParseCrashKindError::new(s)),
        };
        Ok(kind)
    }
}
