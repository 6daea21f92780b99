use serde_derive::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct XrayEvidenceItem {
    pub filename: String,
    /// Base64 encoded file content.
    pub data: String,
}
