//! Batch command - merge many PO documents into one sorted table.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use poex_core::export::PoTable;
use poex_core::models::{LineItemRecord, ShortRowPolicy};
use poex_core::TemplateParser;

use super::extract::parse_pdf;
use super::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output file for the merged table
    #[arg(short, long, default_value = "sorted_purchase_orders.csv")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: BatchFormat,

    /// Keep item rows with too few decimal tokens, with null qty/price
    #[arg(long)]
    keep_short_rows: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum BatchFormat {
    /// Merged sorted CSV table
    Csv,
    /// Merged JSON records (sorted table order)
    Json,
}

/// Outcome for one input file.
struct FileOutcome {
    path: PathBuf,
    records: usize,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("pdf")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching PDF files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let policy = if args.keep_short_rows {
        ShortRowPolicy::KeepNulls
    } else {
        config.extraction.short_row_policy
    };
    let parser = TemplateParser::new().with_short_row_policy(policy);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // One failing document never aborts the batch; it is reported at the end.
    let mut all_records: Vec<LineItemRecord> = Vec::new();
    let mut outcomes = Vec::with_capacity(files.len());

    for path in files {
        match parse_pdf(&path, &parser, &config) {
            Ok(result) => {
                for warning in &result.warnings {
                    warn!("{}: {}", path.display(), warning);
                }
                outcomes.push(FileOutcome {
                    path,
                    records: result.records.len(),
                    error: None,
                });
                all_records.extend(result.records);
            }
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                outcomes.push(FileOutcome {
                    path,
                    records: 0,
                    error: Some(e.to_string()),
                });
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let table = PoTable::from_records(&all_records);

    match args.format {
        BatchFormat::Csv => table.write_csv_path(&args.output)?,
        BatchFormat::Json => {
            fs::write(&args.output, serde_json::to_string_pretty(table.rows())?)?;
        }
    }

    let failed: Vec<&FileOutcome> = outcomes.iter().filter(|o| o.error.is_some()).collect();

    println!();
    println!(
        "{} Extracted {} line item(s) from {} file(s) in {:?}",
        style("✓").green(),
        table.len(),
        outcomes.len() - failed.len(),
        start.elapsed()
    );
    println!(
        "{} Sorted table written to {}",
        style("✓").green(),
        args.output.display()
    );

    if table.is_empty() {
        println!(
            "{} No line items were recognized in any input document",
            style("!").yellow()
        );
    }

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for outcome in &failed {
            println!(
                "  - {}: {}",
                outcome.path.display(),
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}
