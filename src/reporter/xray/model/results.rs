use super::test_result::XrayTest;
use chrono::{DateTime, Utc};
use serde_derive::Serialize;

/// Body of an "import execution results" request.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct XrayTestExecutionResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_execution_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<XrayTestExecutionInfo>,
    /// `None` rather than an empty list when no test could be converted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<Vec<XrayTest>>,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct XrayTestExecutionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::reporter::serialize::optional_xray_date"
    )]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::reporter::serialize::optional_xray_date"
    )]
    pub finish_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_plan_key: Option<String>,
}

impl XrayTestExecutionResults {
    /// Whether there is at least one test to upload.
    pub fn has_tests(&self) -> bool {
        self.tests.as_ref().map_or(false, |tests| !tests.is_empty())
    }
}
