use anyhow::Context;
use svuid_types::{FingerprintReport, ids};

pub fn parse_report_json(text: &str) -> anyhow::Result<FingerprintReport> {
    let report: FingerprintReport = serde_json::from_str(text).context("parse report json")?;
    if report.schema != ids::SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {}", report.schema);
    }
    Ok(report)
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &FingerprintReport) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("serialize report")?;
    json.push('\n');
    Ok(json)
}
