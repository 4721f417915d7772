//! CLI entry point for svuid.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `svuid-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use std::io::Read;
use svuid_app::{
    FingerprintInput, Overrides, parse_report_json, render_markdown, run_bytes,
    run_fingerprint, serialize_report,
};

#[derive(Parser, Debug)]
#[command(
    name = "svuid",
    version,
    about = "Structural serialVersionUID fingerprints for class declarations"
)]
struct Cli {
    /// Path to svuid config TOML (missing file means defaults).
    #[arg(long, default_value = "svuid.toml", global = true)]
    config: Utf8PathBuf,

    /// Override digest algorithm (sha1|sha224|sha256|sha384|sha512).
    #[arg(long, global = true)]
    digest: Option<String>,

    /// Override literal format (decimal|hex|kotlin|java|kotlin-field|java-field).
    #[arg(long, global = true)]
    format: Option<String>,

    /// Emit debug logs on stderr (RUST_LOG takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fingerprint every declaration in a snapshot document.
    Fingerprint {
        /// Declaration JSON file, or `-` for stdin.
        input: Utf8PathBuf,

        /// Also write the JSON report here.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Also write a Markdown table here.
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,
    },

    /// Print the canonical byte sequence of each declaration as hex.
    Bytes {
        /// Declaration JSON file, or `-` for stdin.
        input: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match &cli.cmd {
        Commands::Fingerprint {
            input,
            report_out,
            markdown_out,
        } => cmd_fingerprint(&cli, input, report_out.as_deref(), markdown_out.as_deref()),
        Commands::Bytes { input } => cmd_bytes(input),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("svuid error: {err:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("svuid_cli=debug,svuid_app=debug,svuid_domain=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_fingerprint(
    cli: &Cli,
    input: &Utf8Path,
    report_out: Option<&Utf8Path>,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let document_text = read_input(input)?;
    // Load config if present; missing file is allowed (defaults apply).
    let config_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

    let output = run_fingerprint(FingerprintInput {
        document_text: &document_text,
        config_text: &config_text,
        overrides: Overrides {
            digest: cli.digest.clone(),
            format: cli.format.clone(),
        },
    })?;

    for entry in &output.report.entries {
        println!("{}", entry.literal);
    }

    if let Some(path) = report_out {
        let data = serialize_report(&output.report)?;
        write_text_file(path, &data).context("write report json")?;
        tracing::debug!(path = %path, "wrote report");
    }
    if let Some(path) = markdown_out {
        write_text_file(path, &render_markdown(&output.report)).context("write markdown")?;
        tracing::debug!(path = %path, "wrote markdown");
    }

    Ok(())
}

fn cmd_bytes(input: &Utf8Path) -> anyhow::Result<()> {
    let document_text = read_input(input)?;
    for dump in run_bytes(&document_text)? {
        println!("{}", dump.hex);
    }
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn read_input(path: &Utf8Path) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read declarations from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("read declarations: {}", path))
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
