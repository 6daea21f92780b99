use super::{evidence::XrayEvidenceItem, test_info::XrayTestInfo};
use chrono::{DateTime, Utc};
use serde_derive::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct XrayTest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_key: Option<String>,
    #[serde(with = "crate::reporter::serialize::xray_date")]
    pub start: DateTime<Utc>,
    #[serde(with = "crate::reporter::serialize::xray_date")]
    pub finish: DateTime<Utc>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<XrayEvidenceItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_info: Option<XrayTestInfo>,
}
