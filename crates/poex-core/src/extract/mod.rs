//! Purchase-order field extraction module.

mod parser;
pub mod rules;

pub use parser::{ParseResult, RecordParser, TemplateParser};

use crate::error::{ExtractionError, Result};
use crate::models::PoexConfig;
use crate::pdf::{PdfExtractor, PdfProcessor};

/// Run the whole per-document pipeline: load PDF bytes, extract page text,
/// and scan for records.
pub fn extract_document(
    data: &[u8],
    parser: &TemplateParser,
    config: &PoexConfig,
) -> Result<ParseResult> {
    let mut extractor = PdfExtractor::new();
    extractor.load(data)?;

    let content = extractor.extract_all(config.pdf.max_pages)?;
    let text_len = content.text.trim().len();
    if text_len < config.pdf.min_text_length {
        return Err(ExtractionError::NoText(text_len).into());
    }

    Ok(parser.parse_document(&content))
}
