use std::fmt;

/// Where the after-run hook currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum HookState {
    Idle,
    Converting,
    /// Carries the key of the created or updated test execution, `None` if
    /// there was nothing to upload.
    Uploaded(Option<String>),
    Skipped(SkipCause),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipCause {
    RunFailed,
    UploadDisabled,
}

impl fmt::Display for HookState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookState::Idle => f.write_str("idle"),
            HookState::Converting => f.write_str("converting"),
            HookState::Uploaded(Some(key)) => write!(f, "uploaded to {}", key),
            HookState::Uploaded(None) => f.write_str("nothing uploaded"),
            HookState::Skipped(SkipCause::RunFailed) => f.write_str("skipped (run failed)"),
            HookState::Skipped(SkipCause::UploadDisabled) => {
                f.write_str("skipped (upload disabled)")
            }
        }
    }
}
