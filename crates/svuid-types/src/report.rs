use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// One fingerprinted declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FingerprintEntry {
    /// Class name, absent for unnamed declarations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub fingerprint: i64,
    /// The fingerprint rendered in the configured literal format.
    pub literal: String,
    /// Length in bytes of the canonical serialization that was digested.
    pub canonical_len: u64,
}

/// `svuid.report.v1`: fingerprints for every declaration of one input document,
/// in input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FingerprintReport {
    /// Versioned schema identifier for the report shape.
    pub schema: String,
    pub tool: ToolMeta,
    /// Digest algorithm name, e.g. `sha256`.
    pub digest: String,
    pub entries: Vec<FingerprintEntry>,
}
