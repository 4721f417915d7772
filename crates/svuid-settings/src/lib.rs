//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::SvuidConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `svuid.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SvuidConfigV1> {
    let cfg: SvuidConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective settings (overrides, then config, then defaults).
pub fn resolve_config(cfg: SvuidConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
