//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return parent.to_path_buf();
    }
    manifest_dir
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaFile {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_declaration_schema() -> schemars::Schema {
    schema_for!(svuid_types::DeclarationDocument)
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(svuid_types::FingerprintReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(svuid_settings::SvuidConfigV1)
}

fn schema_files() -> Vec<SchemaFile> {
    vec![
        SchemaFile {
            filename: "svuid.declaration.v1.json",
            generate: generate_declaration_schema,
        },
        SchemaFile {
            filename: "svuid.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaFile {
            filename: "svuid.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for file in schema_files() {
        let json = serialize_schema(&(file.generate)())?;
        let path = dir.join(file.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for file in schema_files() {
        let path = dir.join(file.filename);
        if !path.exists() {
            missing.push(file.filename);
            continue;
        }

        let expected = serialize_schema(&(file.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(file.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn compile(schema: &schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("Failed to serialize schema")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

/// Single-declaration documents are checked as a one-element envelope.
fn as_envelope(value: Value) -> Value {
    if value.get("declarations").is_some() {
        value
    } else {
        serde_json::json!({ "declarations": [value] })
    }
}

/// Validate every fixture under tests/fixtures against the generated schemas.
///
/// `declaration.json` files are checked against the declaration schema and
/// `expected.report.json` files against the report schema.
fn conform() -> anyhow::Result<()> {
    let declaration = compile(&generate_declaration_schema())?;
    let report = compile(&generate_report_schema())?;

    let root = fixtures_dir();
    if !root.exists() {
        bail!("tests/fixtures/ not found at {}", root.display());
    }

    let mut checked = 0;
    let mut errors = Vec::new();

    for entry in WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let (validator, wrap) = match entry.file_name().to_str() {
            Some("declaration.json") => (&declaration, true),
            Some("expected.report.json") => (&report, false),
            _ => continue,
        };

        let rel = path.strip_prefix(&root).unwrap_or(path).display().to_string();
        let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", rel))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", rel))?;
        let value = if wrap { as_envelope(value) } else { value };

        let before = errors.len();
        for err in validator.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", rel, err));
        }
        if errors.len() == before {
            println!("  ✓ {} validates", rel);
        }
        checked += 1;
    }

    if checked == 0 {
        bail!("No JSON fixtures found in {}", root.display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} fixture files pass conformance checks!", checked);
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate tests/fixtures against the generated schemas");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "print-schema-ids" => {
            for file in schema_files() {
                println!("{}", file.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
