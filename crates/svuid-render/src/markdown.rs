use svuid_types::{FingerprintReport, ids};

pub fn render_markdown(report: &FingerprintReport) -> String {
    let mut out = String::new();

    out.push_str("# svuid report\n\n");
    out.push_str(&format!(
        "- Digest: `{}`\n- Declarations: {}\n\n",
        report.digest,
        report.entries.len()
    ));

    if report.entries.is_empty() {
        out.push_str("No declarations.\n");
        return out;
    }

    out.push_str("| Class | Fingerprint |\n");
    out.push_str("| --- | --- |\n");
    for entry in &report.entries {
        let class = match &entry.name {
            Some(name) => code_cell(name),
            None => ids::ANONYMOUS_CLASS.to_string(),
        };
        out.push_str(&format!("| {} | {} |\n", class, code_cell(&entry.literal)));
    }

    out
}

/// Code span that stays inside one table cell.
///
/// Pipes are escaped, line breaks become spaces, and text containing a
/// backtick gets a double-backtick fence.
fn code_cell(text: &str) -> String {
    let escaped = text.replace('|', "\\|").replace(['\r', '\n'], " ");
    if escaped.contains('`') {
        format!("`` {escaped} ``")
    } else {
        format!("`{escaped}`")
    }
}
