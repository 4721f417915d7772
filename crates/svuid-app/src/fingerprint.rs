//! The `fingerprint` use case: resolve settings, fingerprint every declaration, build a report.

use anyhow::Context;
use rayon::prelude::*;
use svuid_render::render_literal;
use svuid_settings::{Overrides, ResolvedConfig};
use svuid_types::{FingerprintEntry, FingerprintReport, ToolMeta, ids};

use crate::document::parse_document;

/// Input for the fingerprint use case.
#[derive(Clone, Debug)]
pub struct FingerprintInput<'a> {
    /// Snapshot document (single declaration or envelope).
    pub document_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the fingerprint use case.
#[derive(Clone, Debug)]
pub struct FingerprintOutput {
    pub report: FingerprintReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

pub fn run_fingerprint(input: FingerprintInput<'_>) -> anyhow::Result<FingerprintOutput> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        svuid_settings::SvuidConfigV1::default()
    } else {
        svuid_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = svuid_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let declarations = parse_document(input.document_text).context("load declarations")?;
    tracing::info!(
        declarations = declarations.len(),
        digest = %resolved.digest,
        "fingerprinting declarations"
    );

    // Declarations are independent; collect() keeps input order.
    let entries: Vec<FingerprintEntry> = declarations
        .par_iter()
        .map(|decl| {
            let fingerprint = svuid_domain::fingerprint_declaration(decl, resolved.digest);
            FingerprintEntry {
                name: decl.name.clone(),
                fingerprint: fingerprint.value,
                literal: render_literal(fingerprint.value, resolved.format),
                canonical_len: fingerprint.canonical_len as u64,
            }
        })
        .collect();

    let report = FingerprintReport {
        schema: ids::SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "svuid".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        digest: resolved.digest.to_string(),
        entries,
    };

    Ok(FingerprintOutput {
        report,
        resolved_config: resolved,
    })
}
