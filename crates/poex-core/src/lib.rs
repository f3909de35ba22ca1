//! Core library for purchase-order extraction.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - Rule-based field extraction for the fixed vendor PO template
//! - Line-item record models
//! - Aggregation, sorting, and CSV export of extracted records

pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod pdf;

pub use error::{PoexError, Result};
pub use export::{PoTable, TableRow};
pub use extract::{extract_document, ParseResult, RecordParser, TemplateParser};
pub use models::{LineItemRecord, PoContext, PoexConfig, ShortRowPolicy};
pub use pdf::{PdfContent, PdfExtractor, PdfPage, PdfProcessor};
