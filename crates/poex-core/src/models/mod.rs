//! Data models for purchase-order extraction.

pub mod config;
pub mod record;

pub use config::{ExtractionConfig, PdfConfig, PoexConfig, ShortRowPolicy};
pub use record::{LineItemRecord, PoContext, PO_DATE_FORMAT};
