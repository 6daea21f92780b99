use serde_derive::Serialize;

/// Issue data used by Xray to create or update the test issue. Server and
/// cloud only differ in the name of the test type field.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum XrayTestInfo {
    Server(ServerTestInfo),
    Cloud(CloudTestInfo),
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerTestInfo {
    pub project_key: String,
    pub summary: String,
    pub test_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<XrayManualTestStep>>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CloudTestInfo {
    pub project_key: String,
    pub summary: String,
    #[serde(rename = "type")]
    pub test_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<XrayManualTestStep>>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct XrayManualTestStep {
    pub action: String,
}

impl XrayTestInfo {
    pub fn project_key(&self) -> &str {
        match self {
            XrayTestInfo::Server(info) => &info.project_key,
            XrayTestInfo::Cloud(info) => &info.project_key,
        }
    }

    pub fn summary(&self) -> &str {
        match self {
            XrayTestInfo::Server(info) => &info.summary,
            XrayTestInfo::Cloud(info) => &info.summary,
        }
    }

    pub fn steps(&self) -> Option<&[XrayManualTestStep]> {
        match self {
            XrayTestInfo::Server(info) => info.steps.as_deref(),
            XrayTestInfo::Cloud(info) => info.steps.as_deref(),
        }
    }
}
