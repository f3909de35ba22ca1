//! Item-row detection for the PO item table.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{DECIMAL_TOKEN, ITEM_CODE};
use crate::models::ShortRowPolicy;

/// A parsed item-table row, before the context snapshot is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    /// 6-digit item/reference code (first token of the line).
    pub code: String,
    /// Ordered quantity (3rd-from-last decimal token).
    pub ordered_qty: Option<Decimal>,
    /// Unit price (2nd-from-last decimal token).
    pub price: Option<Decimal>,
}

/// Try to parse a text line as an item-table row.
///
/// A row is recognized when the first whitespace-delimited token of the
/// trimmed line is exactly 6 digits. Decimal tokens of shape `\d+.\d{2}`
/// are collected in order of appearance; with at least three, the
/// 3rd-from-last is the quantity and the 2nd-from-last the price (the
/// last, presumed line-total, is discarded). Rows with fewer decimal
/// tokens follow `policy`.
pub fn parse_item_row(line: &str, policy: ShortRowPolicy) -> Option<ItemRow> {
    let trimmed = line.trim();
    let mut tokens = trimmed.split_whitespace();

    let first = tokens.next()?;
    if !ITEM_CODE.is_match(first) {
        return None;
    }

    let decimals: Vec<Decimal> = trimmed
        .split_whitespace()
        .skip(1)
        .filter(|t| DECIMAL_TOKEN.is_match(t))
        .filter_map(|t| Decimal::from_str(t).ok())
        .collect();

    if decimals.len() >= 3 {
        let n = decimals.len();
        Some(ItemRow {
            code: first.to_string(),
            ordered_qty: Some(decimals[n - 3]),
            price: Some(decimals[n - 2]),
        })
    } else {
        match policy {
            ShortRowPolicy::Skip => None,
            ShortRowPolicy::KeepNulls => Some(ItemRow {
                code: first.to_string(),
                ordered_qty: None,
                price: None,
            }),
        }
    }
}
