//! Process command - extract fields from a single statement.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::info;

use cardstmt_core::{ResultRecord, StatementProcessor};

use crate::output;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Statement PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Password for an encrypted statement
    #[arg(long)]
    password: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::load_config(config_path)?;
    if let Some(password) = &args.password {
        config.pdf.password = password.clone();
    }
    config.validate()?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let processor = StatementProcessor::from_config(&config);
    let record = processor
        .process(&args.input, &config.pdf.password)
        .with_context(|| format!("Failed to process {}", args.input.display()))?;

    info!("Processed {} in {:?}", args.input.display(), start.elapsed());

    let content = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &content)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", content.trim_end());
    }

    Ok(())
}

fn format_record(record: &ResultRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => output::format_csv(std::slice::from_ref(record)),
        OutputFormat::Text => Ok(format_record_text(record)),
    }
}

fn format_record_text(record: &ResultRecord) -> String {
    let mut out = String::new();

    let bank = record.bank.map(|b| b.to_string()).unwrap_or_else(|| "-".to_string());
    out.push_str(&format!("Statement: {}\n", record.source_file));
    out.push_str(&format!("Bank: {}\n", bank));
    out.push('\n');

    for (name, value) in record.fields.entries() {
        out.push_str(&format!("  {:<24}{}\n", name, value.unwrap_or("-")));
    }

    if let Some(error) = &record.error {
        out.push_str(&format!("\nError: {}\n", error));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardstmt_core::{BankId, FieldRecord};

    #[test]
    fn test_text_format_lists_every_field() {
        let record = ResultRecord::new(
            BankId::Bank3,
            FieldRecord {
                last4: Some("8007".to_string()),
                ..FieldRecord::absent()
            },
            "icici.pdf",
        );

        let text = format_record_text(&record);

        assert!(text.contains("Bank: bank3"));
        assert!(text.contains("last4"));
        assert!(text.contains("8007"));
        assert_eq!(text.lines().filter(|line| line.ends_with(" -")).count(), 4);
        for name in FieldRecord::FIELD_NAMES {
            assert!(text.contains(name), "{name} missing");
        }
    }

    #[test]
    fn test_csv_format_single_record() {
        let record = ResultRecord::new(BankId::Unknown, FieldRecord::absent(), "other.pdf");
        let csv = format_record(&record, OutputFormat::Csv).unwrap();

        assert!(csv.starts_with("bank,last4,"));
        assert!(csv.contains("unknown,,,,other.pdf,,"));
    }
}
