use thiserror::Error;

/// A string that does not name any [`CrashKind`](crate::CrashKind).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown crash kind `{input}`, expected one of: segfault, panic, panic-background-thread")]
pub struct ParseCrashKindError {
    input: String,
}

impl ParseCrashKindError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}
