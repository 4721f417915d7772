use crate::model::SvuidConfigV1;
use anyhow::Context;
use svuid_domain::DigestAlgorithm;
use svuid_types::{LiteralFormat, ids};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub digest: Option<String>,
    pub format: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub digest: DigestAlgorithm,
    pub format: LiteralFormat,
}

pub fn resolve_config(cfg: SvuidConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != ids::SCHEMA_CONFIG_V1
    {
        anyhow::bail!(
            "unsupported config schema: {schema} (expected {})",
            ids::SCHEMA_CONFIG_V1
        );
    }

    let mut resolved = ResolvedConfig::default();

    if let Some(digest) = overrides.digest.or(cfg.digest) {
        resolved.digest = parse_digest(&digest).context("invalid digest")?;
    }
    if let Some(format) = overrides.format.or(cfg.format) {
        resolved.format = parse_format(&format).context("invalid format")?;
    }

    Ok(resolved)
}

fn parse_digest(v: &str) -> anyhow::Result<DigestAlgorithm> {
    match DigestAlgorithm::from_name(v) {
        Some(algorithm) => Ok(algorithm),
        None => anyhow::bail!("unknown digest: {v} (expected sha1|sha224|sha256|sha384|sha512)"),
    }
}

fn parse_format(v: &str) -> anyhow::Result<LiteralFormat> {
    match LiteralFormat::from_name(v) {
        Some(format) => Ok(format),
        None => anyhow::bail!(
            "unknown format: {v} (expected decimal|hex|kotlin|java|kotlin-field|java-field)"
        ),
    }
}
