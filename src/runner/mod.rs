pub mod result;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::result::{AttemptEntry, RunResult, RunStatus, TestEntry, TestState};
