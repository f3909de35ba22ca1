//! Aggregation of records into the sorted output table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{LineItemRecord, PO_DATE_FORMAT};

/// Canonical output column order.
pub const COLUMNS: [&str; 8] = [
    "Store ID",
    "Store Name",
    "PO No.",
    "Order Date",
    "Delivery Date",
    "Item#",
    "Ordered Qty",
    "Price",
];

/// One row of the export table, with sort keys coerced to integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Store ID coerced to an integer; `None` when missing or non-numeric.
    #[serde(rename = "Store ID")]
    pub store_id: Option<i64>,

    #[serde(rename = "Store Name")]
    pub store_name: String,

    /// PO number coerced to an integer; `None` on coercion failure.
    #[serde(rename = "PO No.")]
    pub po_number: Option<i64>,

    /// Order date in the template's `DD/MM/YYYY` form.
    #[serde(rename = "Order Date")]
    pub order_date: String,

    /// Delivery date in the template's `DD/MM/YYYY` form.
    #[serde(rename = "Delivery Date")]
    pub delivery_date: String,

    #[serde(rename = "Item#")]
    pub item_code: String,

    #[serde(rename = "Ordered Qty")]
    pub ordered_qty: Option<Decimal>,

    #[serde(rename = "Price")]
    pub price: Option<Decimal>,
}

impl From<&LineItemRecord> for TableRow {
    fn from(record: &LineItemRecord) -> Self {
        Self {
            store_id: record.store_id.as_deref().and_then(coerce_int),
            store_name: record.store_name.clone().unwrap_or_default(),
            po_number: coerce_int(&record.po_number),
            order_date: record
                .order_date
                .map(|d| d.format(PO_DATE_FORMAT).to_string())
                .unwrap_or_default(),
            delivery_date: record
                .delivery_date
                .map(|d| d.format(PO_DATE_FORMAT).to_string())
                .unwrap_or_default(),
            item_code: record.item_code.clone(),
            ordered_qty: record.ordered_qty,
            price: record.price,
        }
    }
}

/// The merged, sorted output table.
#[derive(Debug, Clone, Default)]
pub struct PoTable {
    rows: Vec<TableRow>,
}

impl PoTable {
    /// Build a table from records of any number of documents.
    ///
    /// Rows are stable-sorted ascending by (Store ID, PO No.); rows whose
    /// key failed integer coercion sort after all rows with that key
    /// present.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a LineItemRecord>,
    {
        let mut rows: Vec<TableRow> = records.into_iter().map(TableRow::from).collect();
        rows.sort_by_key(|row| (null_last(row.store_id), null_last(row.po_number)));

        debug!("Aggregated {} row(s) into output table", rows.len());
        Self { rows }
    }

    /// Rows in output order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// None keys order after every present value.
fn null_last(key: Option<i64>) -> (bool, i64) {
    match key {
        Some(v) => (false, v),
        None => (true, 0),
    }
}

/// Coerce a numeric-looking string to an integer; failures become `None`.
fn coerce_int(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok()
}
