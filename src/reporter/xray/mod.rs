pub mod model;

use self::model::test_info::{CloudTestInfo, ServerTestInfo};
use self::model::{XrayManualTestStep, XrayTestInfo};
use crate::configuration::constants::xray::{CLOUD_IMPORT_PATH, SERVER_IMPORT_PATH};
use crate::configuration::options::StatusOptions;
use crate::error::{Error, Result};
use crate::runner::TestState;
use jsonpath::Selector;
use serde_json::Value;

/// The Xray flavour results are uploaded to. Both accept the same import
/// format apart from a few field names, default statuses and the place the
/// created execution's key is reported at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetVariant {
    Server,
    Cloud,
}

impl TargetVariant {
    pub fn import_url(self, base_url: &str) -> String {
        let path = match self {
            TargetVariant::Server => SERVER_IMPORT_PATH,
            TargetVariant::Cloud => CLOUD_IMPORT_PATH,
        };
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }

    fn issue_key_path(self) -> &'static str {
        match self {
            TargetVariant::Server => "$.testExecIssue.key",
            TargetVariant::Cloud => "$.key",
        }
    }

    fn default_status(self, state: &TestState) -> Option<&'static str> {
        match (self, state) {
            (TargetVariant::Server, TestState::Passed) => Some("PASS"),
            (TargetVariant::Server, TestState::Failed) => Some("FAIL"),
            (TargetVariant::Cloud, TestState::Passed) => Some("PASSED"),
            (TargetVariant::Cloud, TestState::Failed) => Some("FAILED"),
            (TargetVariant::Cloud, TestState::Pending) => Some("PENDING"),
            (TargetVariant::Cloud, TestState::Skipped) => Some("SKIPPED"),
            _ => None,
        }
    }

    /// Xray status for a runner state, preferring configured names. `None`
    /// if neither a custom name nor a default exists.
    pub fn status(self, state: &TestState, custom: &StatusOptions) -> Option<String> {
        let configured = match state {
            TestState::Passed => custom.passed.as_ref(),
            TestState::Failed => custom.failed.as_ref(),
            TestState::Pending => custom.pending.as_ref(),
            TestState::Skipped => custom.skipped.as_ref(),
            TestState::Unknown(_) => None,
        };
        configured
            .cloned()
            .or_else(|| self.default_status(state).map(str::to_owned))
    }

    pub fn test_info(
        self,
        project_key: &str,
        summary: String,
        test_type: &str,
        steps: Option<Vec<XrayManualTestStep>>,
    ) -> XrayTestInfo {
        match self {
            TargetVariant::Server => XrayTestInfo::Server(ServerTestInfo {
                project_key: project_key.to_owned(),
                summary,
                test_type: test_type.to_owned(),
                steps,
            }),
            TargetVariant::Cloud => XrayTestInfo::Cloud(CloudTestInfo {
                project_key: project_key.to_owned(),
                summary,
                test_type: test_type.to_owned(),
                steps,
            }),
        }
    }

    /// Extracts the test execution issue key from an import response body.
    pub fn issue_key(self, body: &[u8]) -> Result<String> {
        let path = self.issue_key_path();
        let response: Value = serde_json::from_slice(body)?;
        let selector = Selector::new(path)
            .map_err(|_| Error::Response(format!("invalid issue key selector {}", path)))?;
        let key = selector.find(&response).find_map(Value::as_str);
        key.map(str::to_owned)
            .ok_or_else(|| Error::Response(format!("no issue key found at {}", path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_statuses() {
        let custom = StatusOptions::default();

        let server = |state| TargetVariant::Server.status(&state, &custom);
        let cloud = |state| TargetVariant::Cloud.status(&state, &custom);

        assert_eq!(server(TestState::Passed).as_deref(), Some("PASS"));
        assert_eq!(server(TestState::Failed).as_deref(), Some("FAIL"));
        assert_eq!(server(TestState::Pending), None);
        assert_eq!(cloud(TestState::Passed).as_deref(), Some("PASSED"));
        assert_eq!(cloud(TestState::Skipped).as_deref(), Some("SKIPPED"));
        assert_eq!(
            TargetVariant::Cloud.status(&TestState::Unknown("broken".to_owned()), &custom),
            None
        );
    }

    #[test]
    fn test_custom_statuses_take_precedence() {
        let custom = StatusOptions {
            pending: Some("TODO".to_owned()),
            failed: Some("it did not work".to_owned()),
            ..StatusOptions::default()
        };

        assert_eq!(
            TargetVariant::Server
                .status(&TestState::Pending, &custom)
                .as_deref(),
            Some("TODO")
        );
        assert_eq!(
            TargetVariant::Cloud.status(&TestState::Failed, &custom).as_deref(),
            Some("it did not work")
        );
    }

    #[test]
    fn test_import_urls() {
        assert_eq!(
            TargetVariant::Server.import_url("https://jira.example.org/"),
            "https://jira.example.org/rest/raven/latest/api/import/execution"
        );
        assert_eq!(
            TargetVariant::Cloud.import_url("https://xray.cloud.getxray.app/api/v2"),
            "https://xray.cloud.getxray.app/api/v2/import/execution"
        );
    }

    #[test]
    fn test_issue_key_extraction() {
        let server = json!({
            "testExecIssue": { "id": "12345", "key": "CYP-123", "self": "http://localhost" }
        });
        let cloud = json!({ "id": "12345", "key": "CYP-456", "self": "http://localhost" });

        assert_eq!(
            TargetVariant::Server.issue_key(server.to_string().as_bytes()).unwrap(),
            "CYP-123"
        );
        assert_eq!(
            TargetVariant::Cloud.issue_key(cloud.to_string().as_bytes()).unwrap(),
            "CYP-456"
        );
        assert!(matches!(
            TargetVariant::Server.issue_key(cloud.to_string().as_bytes()),
            Err(Error::Response(_))
        ));
    }

    #[test]
    fn test_test_info_field_names_differ() {
        let server = TargetVariant::Server.test_info("CYP", "a test".to_owned(), "Manual", None);
        let cloud = TargetVariant::Cloud.test_info("CYP", "a test".to_owned(), "Manual", None);

        assert_eq!(
            serde_json::to_value(&server).unwrap(),
            json!({ "projectKey": "CYP", "summary": "a test", "testType": "Manual" })
        );
        assert_eq!(
            serde_json::to_value(&cloud).unwrap(),
            json!({ "projectKey": "CYP", "summary": "a test", "type": "Manual" })
        );
    }
}
