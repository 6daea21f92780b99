pub mod text;

use crate::configuration::options::Options;
use crate::error::{Error, Result};
use crate::reporter::xray::model::{
    XrayEvidenceItem, XrayManualTestStep, XrayTest, XrayTestExecutionInfo, XrayTestExecutionResults,
};
use crate::reporter::xray::TargetVariant;
use crate::runner::{RunResult, TestEntry};
use crate::time::whole_seconds;
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;

/// Result of a conversion: the payload plus every test left out of it.
#[derive(Debug)]
pub struct ConversionOutcome {
    pub results: XrayTestExecutionResults,
    pub skipped: Vec<SkippedTest>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedTest {
    pub title: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    UnknownStatus(String),
    MissingIssueKey,
    NoAttempts,
}

impl fmt::Display for SkippedTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::UnknownStatus(state) => {
                write!(f, "Unknown Cypress test status: '{}'.", state)?
            }
            SkipReason::MissingIssueKey => f.write_str(
                "No test issue key found in test title and the plugin is not allowed to create new test issues.",
            )?,
            SkipReason::NoAttempts => {
                f.write_str("No attempts were recorded for the test.")?
            }
        }
        write!(f, " Skipping result upload for test \"{}\".", self.title)
    }
}

/// Converts runner results into Xray "import execution results" payloads.
pub struct ExecutionResultsConverter<'a> {
    options: &'a Options,
    variant: TargetVariant,
    issue_key: Regex,
}

impl<'a> ExecutionResultsConverter<'a> {
    pub fn new(options: &'a Options, variant: TargetVariant) -> Result<Self> {
        let pattern = format!(r"\b{}-\d+\b", regex::escape(&options.jira.project_key));
        let issue_key = Regex::new(&pattern)
            .map_err(|e| Error::Configuration(format!("unusable project key: {}", e)))?;
        Ok(Self {
            options,
            variant,
            issue_key,
        })
    }

    pub fn convert(&self, results: &RunResult) -> Result<ConversionOutcome> {
        let mut tests = Vec::new();
        let mut skipped = Vec::new();
        for run in &results.runs {
            if let Some(spec) = &run.spec {
                debug!("Converting results of {}", spec.relative.display());
            }
            for test in &run.tests {
                match self.convert_test(test)? {
                    Ok(converted) => tests.push(converted),
                    Err(skip) => {
                        warn!("{}", skip);
                        skipped.push(skip);
                    }
                }
            }
        }
        let payload = XrayTestExecutionResults {
            test_execution_key: self.options.jira.test_execution_issue_key.clone(),
            info: self.execution_info(results),
            tests: if tests.is_empty() { None } else { Some(tests) },
        };
        Ok(ConversionOutcome {
            results: payload,
            skipped,
        })
    }

    /// The outer result carries local I/O failures, the inner one tests
    /// that cannot be uploaded.
    fn convert_test(&self, test: &TestEntry) -> Result<std::result::Result<XrayTest, SkippedTest>> {
        let title = test.full_title();
        let skip = |reason: SkipReason| -> Result<std::result::Result<XrayTest, SkippedTest>> {
            Ok(Err(SkippedTest {
                title: title.clone(),
                reason,
            }))
        };
        let attempt = match test.final_attempt() {
            Some(attempt) => attempt,
            None => return skip(SkipReason::NoAttempts),
        };
        let status = match self.variant.status(&attempt.state, &self.options.xray.status) {
            Some(status) => status,
            None => return skip(SkipReason::UnknownStatus(attempt.state.to_string())),
        };
        let test_key = self.issue_key.find(&title).map(|key| key.as_str().to_owned());
        if test_key.is_none() && !self.options.jira.create_test_issues {
            return skip(SkipReason::MissingIssueKey);
        }
        let steps = if self.options.xray.steps.update {
            Some(vec![XrayManualTestStep {
                action: text::truncate(&test.body, self.options.xray.steps.max_length_action),
            }])
        } else {
            None
        };
        let test_info = self.variant.test_info(
            &self.options.jira.project_key,
            title.clone(),
            &self.options.xray.test_type,
            steps,
        );
        Ok(Ok(XrayTest {
            test_key,
            start: whole_seconds(attempt.started_at),
            finish: whole_seconds(attempt.finished_at()?),
            status,
            evidence: self.evidence(test)?,
            test_info: Some(test_info),
        }))
    }

    fn evidence(&self, test: &TestEntry) -> Result<Option<Vec<XrayEvidenceItem>>> {
        if !self.options.xray.upload_screenshots {
            return Ok(None);
        }
        let mut evidence = Vec::new();
        for screenshot in test.screenshots() {
            let mut filename = text::base_name(&screenshot.path);
            if self.options.plugin.normalize_screenshot_names {
                filename = text::normalized_filename(&filename);
            }
            evidence.push(XrayEvidenceItem {
                filename,
                data: encode_file(&screenshot.path)?,
            });
        }
        Ok(if evidence.is_empty() { None } else { Some(evidence) })
    }

    fn execution_info(&self, results: &RunResult) -> Option<XrayTestExecutionInfo> {
        let jira = &self.options.jira;
        if jira.test_execution_issue_key.is_some() {
            return jira.test_plan_issue_key.as_ref().map(|plan| XrayTestExecutionInfo {
                test_plan_key: Some(plan.clone()),
                ..XrayTestExecutionInfo::default()
            });
        }
        let summary = jira.test_execution_issue_summary.clone().unwrap_or_else(|| {
            let started = results
                .started_tests_at
                .map(|date| date.timestamp_millis().to_string())
                .unwrap_or_default();
            format!("Execution Results [{}]", started)
        });
        let description = jira
            .test_execution_issue_description
            .clone()
            .unwrap_or_else(|| {
                format!(
                    "Cypress version: {} Browser: {} ({})",
                    results.cypress_version.as_deref().unwrap_or("unknown"),
                    results.browser_name.as_deref().unwrap_or("unknown"),
                    results.browser_version.as_deref().unwrap_or("unknown"),
                )
            });
        Some(XrayTestExecutionInfo {
            project: Some(jira.project_key.clone()),
            summary: Some(summary),
            description: Some(description),
            start_date: results.started_tests_at.map(whole_seconds),
            finish_date: results.ended_tests_at.map(whole_seconds),
            test_plan_key: jira.test_plan_issue_key.clone(),
        })
    }
}

fn encode_file(path: &Path) -> Result<String> {
    let content = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(base64::encode(content))
}
