//! Aggregation and tabular export module.

mod table;
mod writer;

pub use table::{PoTable, TableRow, COLUMNS};
pub use writer::Result;
