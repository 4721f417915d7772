use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `svuid.toml` schema v1.
///
/// Values are kept as strings here; resolution validates them so error
/// messages can list the accepted names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SvuidConfigV1 {
    /// Optional schema string for tooling (`svuid.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Digest algorithm: `sha1`, `sha224`, `sha256` (default), `sha384`, `sha512`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,

    /// Literal format: `decimal`, `hex`, `kotlin` (default), `java`,
    /// `kotlin-field`, `java-field`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}
