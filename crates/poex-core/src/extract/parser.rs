//! Line-oriented parser for the vendor's fixed PO template.

use tracing::{debug, info};

use crate::models::{LineItemRecord, PoContext, ShortRowPolicy};
use crate::pdf::PdfContent;

use super::rules::{apply_header_fields, parse_item_row};

/// Result of parsing one document.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Extracted line-item records, in document order.
    pub records: Vec<LineItemRecord>,
    /// Final header context after the scan.
    pub context: PoContext,
    /// Human-readable extraction warnings.
    pub warnings: Vec<String>,
}

/// Trait for PO record parsers.
pub trait RecordParser {
    /// Parse records from extracted document text.
    fn parse(&self, text: &str) -> ParseResult;
}

/// Parser for the fixed vendor PO layout.
///
/// A single left-to-right pass over the lines of a document: header-field
/// matches update the per-document context, item-row matches emit one
/// record carrying a snapshot of that context.
pub struct TemplateParser {
    short_row_policy: ShortRowPolicy,
}

impl TemplateParser {
    /// Create a parser with the default (strict) short-row policy.
    pub fn new() -> Self {
        Self {
            short_row_policy: ShortRowPolicy::Skip,
        }
    }

    /// Set the policy for item rows with too few decimal tokens.
    pub fn with_short_row_policy(mut self, policy: ShortRowPolicy) -> Self {
        self.short_row_policy = policy;
        self
    }

    /// Parse a whole document, page by page, with one context for the
    /// document. Pages with no extractable text contribute no lines.
    pub fn parse_document(&self, content: &PdfContent) -> ParseResult {
        let mut ctx = PoContext::new();
        let mut records = Vec::new();
        let mut dropped_before_header = 0usize;
        let mut skipped_short_rows = 0usize;

        for page in &content.pages {
            self.scan_lines(
                &page.text,
                &mut ctx,
                &mut records,
                &mut dropped_before_header,
                &mut skipped_short_rows,
            );
        }

        self.finish(ctx, records, dropped_before_header, skipped_short_rows)
    }

    fn scan_lines(
        &self,
        text: &str,
        ctx: &mut PoContext,
        records: &mut Vec<LineItemRecord>,
        dropped_before_header: &mut usize,
        skipped_short_rows: &mut usize,
    ) {
        for line in text.lines() {
            if apply_header_fields(line, ctx) {
                continue;
            }

            // Item rows only count once a PO number has been seen.
            if !ctx.has_po_number() {
                if parse_item_row(line, ShortRowPolicy::KeepNulls).is_some() {
                    *dropped_before_header += 1;
                }
                continue;
            }

            match parse_item_row(line, self.short_row_policy) {
                Some(row) => {
                    if let Some(record) =
                        LineItemRecord::from_context(ctx, row.code, row.ordered_qty, row.price)
                    {
                        records.push(record);
                    }
                }
                None => {
                    // Distinguish short rows from plain noise for the warning count.
                    if self.short_row_policy == ShortRowPolicy::Skip
                        && parse_item_row(line, ShortRowPolicy::KeepNulls).is_some()
                    {
                        *skipped_short_rows += 1;
                    }
                }
            }
        }
    }

    fn finish(
        &self,
        context: PoContext,
        records: Vec<LineItemRecord>,
        dropped_before_header: usize,
        skipped_short_rows: usize,
    ) -> ParseResult {
        let mut warnings = Vec::new();

        if !context.has_po_number() {
            warnings.push("No 'PO No.:' header found; document yields no records".to_string());
        }
        if dropped_before_header > 0 {
            warnings.push(format!(
                "{} item row(s) before the first PO header were dropped",
                dropped_before_header
            ));
        }
        if skipped_short_rows > 0 {
            warnings.push(format!(
                "{} item row(s) with fewer than 3 decimal tokens were skipped",
                skipped_short_rows
            ));
        }

        info!(
            "Extracted {} record(s) for PO {}",
            records.len(),
            context.po_number.as_deref().unwrap_or("<none>")
        );
        debug!(?context, "final header context");

        ParseResult {
            records,
            context,
            warnings,
        }
    }
}

impl Default for TemplateParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordParser for TemplateParser {
    fn parse(&self, text: &str) -> ParseResult {
        let mut ctx = PoContext::new();
        let mut records = Vec::new();
        let mut dropped_before_header = 0usize;
        let mut skipped_short_rows = 0usize;

        self.scan_lines(
            text,
            &mut ctx,
            &mut records,
            &mut dropped_before_header,
            &mut skipped_short_rows,
        );

        self.finish(ctx, records, dropped_before_header, skipped_short_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const SAMPLE: &str = "\
ACME Trading Ltd
PO No.: 4520118
Store : Example Mart - 011
Order Date : 05/01/2024
Delivery Date (on or before) : 12/01/2024

Item  Description        UOM   Qty   Price  Total
123456 WIDGET BLUE 10PK  10 5.00 2.50 12.50
234567 WIDGET RED 5PK    5 3.00 4.00 12.00
Page 1 of 1
";

    #[test]
    fn test_parse_sample_document() {
        let result = TemplateParser::new().parse(SAMPLE);
        assert_eq!(result.records.len(), 2);

        let first = &result.records[0];
        assert_eq!(first.po_number, "4520118");
        assert_eq!(first.store_name.as_deref(), Some("Example Mart"));
        assert_eq!(first.store_id.as_deref(), Some("011"));
        assert_eq!(first.item_code, "123456");
        assert_eq!(first.ordered_qty, Some(Decimal::from_str("5.00").unwrap()));
        assert_eq!(first.price, Some(Decimal::from_str("2.50").unwrap()));

        assert_eq!(result.records[1].item_code, "234567");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_no_po_header_yields_no_records() {
        let text = "\
Store : Example Mart - 011
123456 WIDGET 10 5.00 2.50 12.50
";
        let result = TemplateParser::new().parse(text);
        assert!(result.records.is_empty());
        assert!(result.warnings.iter().any(|w| w.contains("PO No.")));
    }

    #[test]
    fn test_rows_before_first_header_dropped() {
        let text = "\
123456 EARLY ROW 10 5.00 2.50 12.50
PO No.: 100
234567 LATE ROW 1 1.00 2.00 2.00
";
        let result = TemplateParser::new().parse(text);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].item_code, "234567");
        assert!(result.warnings.iter().any(|w| w.contains("dropped")));
    }

    #[test]
    fn test_second_po_header_does_not_relabel_rows() {
        let text = "\
PO No.: 100
PO No.: 999
123456 WIDGET 1 1.00 2.00 2.00
";
        let result = TemplateParser::new().parse(text);
        assert_eq!(result.records[0].po_number, "100");
    }

    #[test]
    fn test_short_rows_follow_policy() {
        let text = "\
PO No.: 100
123456 FREE SAMPLE
";
        let strict = TemplateParser::new().parse(text);
        assert!(strict.records.is_empty());
        assert!(strict.warnings.iter().any(|w| w.contains("skipped")));

        let lenient = TemplateParser::new()
            .with_short_row_policy(ShortRowPolicy::KeepNulls)
            .parse(text);
        assert_eq!(lenient.records.len(), 1);
        assert_eq!(lenient.records[0].ordered_qty, None);
        assert_eq!(lenient.records[0].price, None);
    }

    #[test]
    fn test_context_spans_pages() {
        use crate::pdf::{PdfContent, PdfPage};

        let content = PdfContent {
            text: String::new(),
            pages: vec![
                PdfPage {
                    number: 1,
                    text: "PO No.: 77\nStore : Example Mart - 011\n".to_string(),
                },
                PdfPage {
                    number: 2,
                    text: "123456 CARRIED OVER 2 4.00 1.50 6.00\n".to_string(),
                },
            ],
        };

        let result = TemplateParser::new().parse_document(&content);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].po_number, "77");
        assert_eq!(result.records[0].store_id.as_deref(), Some("011"));
    }
}
