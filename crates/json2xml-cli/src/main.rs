//! json2xml - translate a JSON file into an XML file.

use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use json2xml::{ErrorRecord, Translator, TranslatorOptions, flatten_lines};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "json2xml")]
#[command(version)]
#[command(about = "Translate a JSON document into XML", long_about = None)]
struct Cli {
    /// JSON file to read
    input: PathBuf,

    /// XML file to write
    output: PathBuf,

    /// Replace &, < and > in text content with entity references
    #[arg(long)]
    escape_text: bool,

    /// Only treat space, tab, line feed and carriage return as whitespace
    #[arg(long)]
    json_whitespace: bool,

    /// Maximum number of arrays and objects open at once
    #[arg(long, default_value_t = TranslatorOptions::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// How translation errors are printed
    #[arg(long, value_enum, default_value_t = ErrorFormat::Text)]
    error_format: ErrorFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ErrorFormat {
    /// `Error at position <offset>: <message>`, one per line
    Text,
    /// One JSON object per line
    Json,
}

enum Outcome {
    Written { bytes: usize },
    Rejected(Vec<ErrorRecord>),
}

impl Cli {
    fn options(&self) -> TranslatorOptions {
        TranslatorOptions {
            escape_text: self.escape_text,
            json_whitespace_only: self.json_whitespace,
            max_depth: self.max_depth,
        }
    }
}

/// Reads, translates and, only when the translation is clean, writes.
fn run(cli: &Cli) -> Result<Outcome> {
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("cannot read {}", cli.input.display()))?;
    let flat = flatten_lines(&text);
    debug!(input = %cli.input.display(), chars = flat.chars().count(), "flattened input");

    let translation = Translator::new(&flat, cli.options()).translate();
    match translation.into_result() {
        Ok(xml) => {
            fs::write(&cli.output, &xml)
                .with_context(|| format!("cannot write {}", cli.output.display()))?;
            info!(output = %cli.output.display(), bytes = xml.len(), "wrote xml");
            Ok(Outcome::Written { bytes: xml.len() })
        }
        Err(errors) => {
            warn!(input = %cli.input.display(), count = errors.len(), "translation rejected");
            Ok(Outcome::Rejected(errors))
        }
    }
}

fn report_errors(errors: &[ErrorRecord], format: ErrorFormat) {
    match format {
        ErrorFormat::Text => {
            eprintln!("Errors found during translation:");
            for error in errors {
                eprintln!("{error}");
            }
        }
        ErrorFormat::Json => {
            for error in errors {
                match serde_json::to_string(error) {
                    Ok(line) => eprintln!("{line}"),
                    Err(_) => eprintln!("{error}"),
                }
            }
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the confirmation line.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "json2xml=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(Outcome::Written { bytes }) => {
            debug!(bytes, "done");
            println!(
                "Translation succeeded. Output written to {}",
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Ok(Outcome::Rejected(errors)) => {
            report_errors(&errors, cli.error_format);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error handling files: {err:#}");
            ExitCode::FAILURE
        }
    }
}
