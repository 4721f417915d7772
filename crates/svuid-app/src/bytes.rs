//! The `bytes` use case: expose the canonical serialization for inspection.

use anyhow::Context;

use crate::document::parse_document;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalDump {
    pub name: Option<String>,
    /// Lowercase hex of the canonical byte sequence.
    pub hex: String,
}

pub fn run_bytes(document_text: &str) -> anyhow::Result<Vec<CanonicalDump>> {
    let declarations = parse_document(document_text).context("load declarations")?;
    tracing::debug!(declarations = declarations.len(), "dumping canonical bytes");

    Ok(declarations
        .iter()
        .map(|decl| CanonicalDump {
            name: decl.name.clone(),
            hex: svuid_domain::canonical_hex(decl),
        })
        .collect())
}
