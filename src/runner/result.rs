use crate::error::{Error, Result};
use chrono::{DateTime, Duration, Utc};
use serde_derive::Deserialize;
use std::convert::TryFrom;
use std::fmt;
use std::path::PathBuf;

/// Outcome of a whole runner invocation, as written by `cypress run`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    #[serde(default)]
    pub status: RunStatus,
    #[serde(default)]
    pub failures: u64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub started_tests_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ended_tests_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cypress_version: Option<String>,
    #[serde(default)]
    pub browser_name: Option<String>,
    #[serde(default)]
    pub browser_version: Option<String>,
    #[serde(default)]
    pub runs: Vec<RunEntry>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Finished,
    Failed,
}

impl Default for RunStatus {
    fn default() -> Self {
        RunStatus::Finished
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RunEntry {
    #[serde(default)]
    pub spec: Option<SpecFile>,
    #[serde(default)]
    pub tests: Vec<TestEntry>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SpecFile {
    pub relative: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TestEntry {
    pub title: Vec<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub attempts: Vec<AttemptEntry>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AttemptEntry {
    pub state: TestState,
    pub started_at: DateTime<Utc>,
    /// Milliseconds.
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub screenshots: Vec<Screenshot>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Screenshot {
    pub path: PathBuf,
}

/// Raw state label reported by the runner.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(from = "String")]
pub enum TestState {
    Passed,
    Failed,
    Pending,
    Skipped,
    Unknown(String),
}

impl From<String> for TestState {
    fn from(state: String) -> Self {
        match state.as_str() {
            "passed" => TestState::Passed,
            "failed" => TestState::Failed,
            "pending" => TestState::Pending,
            "skipped" => TestState::Skipped,
            _ => TestState::Unknown(state),
        }
    }
}

impl fmt::Display for TestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestState::Passed => f.write_str("passed"),
            TestState::Failed => f.write_str("failed"),
            TestState::Pending => f.write_str("pending"),
            TestState::Skipped => f.write_str("skipped"),
            TestState::Unknown(state) => f.write_str(state),
        }
    }
}

impl TestEntry {
    /// Title segments joined by single spaces.
    pub fn full_title(&self) -> String {
        self.title.join(" ")
    }

    /// Retries are collapsed: the last attempt decides the result.
    pub fn final_attempt(&self) -> Option<&AttemptEntry> {
        self.attempts.last()
    }

    pub fn screenshots(&self) -> impl Iterator<Item = &Screenshot> {
        self.attempts
            .iter()
            .flat_map(|attempt| attempt.screenshots.iter())
    }
}

impl AttemptEntry {
    /// Fails when the duration does not fit the calendar.
    pub fn finished_at(&self) -> Result<DateTime<Utc>> {
        i64::try_from(self.duration)
            .ok()
            .and_then(|millis| {
                self.started_at
                    .checked_add_signed(Duration::milliseconds(millis))
            })
            .ok_or_else(|| {
                Error::Conversion(format!(
                    "attempt started at {} lasted an impossible {} ms",
                    self.started_at, self.duration
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failed_run_result_has_no_runs() {
        let result: RunResult = serde_json::from_value(json!({
            "status": "failed",
            "failures": 1,
            "message": "Could not find Cypress test run results"
        }))
        .unwrap();

        assert_eq!(result.status, RunStatus::Failed);
        assert_eq!(result.failures, 1);
        assert!(result.runs.is_empty());
    }

    #[test]
    fn test_attempt_states_keep_unknown_labels() {
        let attempt: AttemptEntry = serde_json::from_value(json!({
            "state": "broken",
            "startedAt": "2022-11-28T17:41:15.091Z",
            "duration": 2000
        }))
        .unwrap();

        assert_eq!(attempt.state, TestState::Unknown("broken".to_owned()));
        assert_eq!(attempt.state.to_string(), "broken");
        assert_eq!(
            attempt.finished_at().unwrap(),
            "2022-11-28T17:41:17.091Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn test_out_of_range_durations_are_errors() {
        for duration in &[10_000_000_000_000_000u64, u64::MAX] {
            let attempt: AttemptEntry = serde_json::from_value(json!({
                "state": "passed",
                "startedAt": "2022-11-28T17:41:15.091Z",
                "duration": duration
            }))
            .unwrap();

            assert!(matches!(attempt.finished_at(), Err(Error::Conversion(_))));
        }
    }
}
