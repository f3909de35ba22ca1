//! Extract command - pull line items from a single PO document.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::info;

use poex_core::export::PoTable;
use poex_core::models::{LineItemRecord, ShortRowPolicy, PO_DATE_FORMAT};
use poex_core::{extract_document, ParseResult, TemplateParser};

use super::load_config;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Keep item rows with too few decimal tokens, with null qty/price
    #[arg(long)]
    keep_short_rows: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Sorted CSV table
    Csv,
    /// JSON records
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let policy = if args.keep_short_rows {
        ShortRowPolicy::KeepNulls
    } else {
        config.extraction.short_row_policy
    };
    let parser = TemplateParser::new().with_short_row_policy(policy);

    let result = parse_pdf(&args.input, &parser, &config)?;

    for warning in &result.warnings {
        eprintln!("{} {}", style("!").yellow(), warning);
    }

    if result.records.is_empty() {
        eprintln!(
            "{} No line items extracted from {}",
            style("!").yellow(),
            args.input.display()
        );
    }

    let output = format_records(&result.records, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    Ok(())
}

/// Load a PDF from disk and run the template parser over its pages.
pub fn parse_pdf(
    path: &PathBuf,
    parser: &TemplateParser,
    config: &poex_core::models::PoexConfig,
) -> anyhow::Result<ParseResult> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    extract_document(&data, parser, config)
        .with_context(|| format!("while processing {}", path.display()))
}

pub fn format_records(
    records: &[LineItemRecord],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Csv => {
            let table = PoTable::from_records(records);
            Ok(table.to_csv_string()?)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Text => Ok(format_text(records)),
    }
}

fn format_text(records: &[LineItemRecord]) -> String {
    let mut output = String::new();

    for record in records {
        output.push_str(&format!(
            "PO {}  store {} ({})  item {}  qty {}  price {}\n",
            record.po_number,
            record.store_name.as_deref().unwrap_or("-"),
            record.store_id.as_deref().unwrap_or("-"),
            record.item_code,
            record
                .ordered_qty
                .map(|q| q.to_string())
                .unwrap_or_else(|| "-".to_string()),
            record
                .price
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ));
    }

    if let Some(first) = records.first() {
        if let Some(date) = first.order_date {
            output.push_str(&format!("Ordered {}", date.format(PO_DATE_FORMAT)));
            if let Some(delivery) = first.delivery_date {
                output.push_str(&format!(
                    ", deliver on or before {}",
                    delivery.format(PO_DATE_FORMAT)
                ));
            }
            output.push('\n');
        }
    }

    output
}
