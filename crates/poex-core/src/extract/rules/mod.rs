//! Rule-based field detectors for the vendor PO template.

pub mod header;
pub mod items;
pub mod patterns;

pub use header::{apply_header_fields, parse_po_date};
pub use items::{parse_item_row, ItemRow};
pub use patterns::*;
