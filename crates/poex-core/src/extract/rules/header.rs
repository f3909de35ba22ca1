//! Header-field detection for the PO template's header block.

use chrono::NaiveDate;

use super::patterns::{DELIVERY_DATE, ORDER_DATE, PO_NUMBER, STORE_NAME_ONLY, STORE_WITH_ID};
use crate::models::{PoContext, PO_DATE_FORMAT};

/// Apply the header-field detectors to one line, updating the context.
///
/// Each detector sets exactly one context field, and fields are set once
/// per document (a later match for an already-populated field is ignored).
/// Returns `true` when any detector matched.
pub fn apply_header_fields(line: &str, ctx: &mut PoContext) -> bool {
    let mut matched = false;

    if let Some(caps) = PO_NUMBER.captures(line) {
        ctx.set_po_number(caps[1].to_string());
        matched = true;
    }

    // Prefer the ID-bearing store pattern; fall back to name-only.
    if let Some(caps) = STORE_WITH_ID.captures(line) {
        ctx.set_store(caps[1].trim().to_string(), Some(caps[2].to_string()));
        matched = true;
    } else if let Some(caps) = STORE_NAME_ONLY.captures(line) {
        ctx.set_store(caps[1].trim().to_string(), None);
        matched = true;
    }

    if let Some(caps) = ORDER_DATE.captures(line) {
        if let Some(date) = parse_po_date(&caps[1]) {
            ctx.set_order_date(date);
            matched = true;
        }
    }

    if let Some(caps) = DELIVERY_DATE.captures(line) {
        if let Some(date) = parse_po_date(&caps[1]) {
            ctx.set_delivery_date(date);
            matched = true;
        }
    }

    matched
}

/// Parse a `DD/MM/YYYY` token. Tokens that match the shape but are not a
/// real calendar date (e.g. `99/99/2024`) are treated as line noise.
pub fn parse_po_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, PO_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_po_number_line() {
        let mut ctx = PoContext::new();
        assert!(apply_header_fields("PO No.: 4520118", &mut ctx));
        assert_eq!(ctx.po_number.as_deref(), Some("4520118"));
    }

    #[test]
    fn test_store_line_with_id() {
        let mut ctx = PoContext::new();
        assert!(apply_header_fields("Store : Example Mart - 011", &mut ctx));
        assert_eq!(ctx.store_name.as_deref(), Some("Example Mart"));
        assert_eq!(ctx.store_id.as_deref(), Some("011"));
    }

    #[test]
    fn test_store_line_without_id() {
        let mut ctx = PoContext::new();
        assert!(apply_header_fields("Store : Corner Shop", &mut ctx));
        assert_eq!(ctx.store_name.as_deref(), Some("Corner Shop"));
        assert_eq!(ctx.store_id, None);
    }

    #[test]
    fn test_date_lines() {
        let mut ctx = PoContext::new();
        apply_header_fields("Order Date : 05/01/2024", &mut ctx);
        apply_header_fields("Delivery Date (on or before) : 12/01/2024", &mut ctx);

        assert_eq!(ctx.order_date, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(ctx.delivery_date, NaiveDate::from_ymd_opt(2024, 1, 12));

        // Rendered back without reformatting
        assert_eq!(
            ctx.order_date.unwrap().format(PO_DATE_FORMAT).to_string(),
            "05/01/2024"
        );
    }

    #[test]
    fn test_impossible_date_ignored() {
        let mut ctx = PoContext::new();
        assert!(!apply_header_fields("Order Date : 99/99/2024", &mut ctx));
        assert_eq!(ctx.order_date, None);
    }

    #[test]
    fn test_unrelated_line_does_not_match() {
        let mut ctx = PoContext::new();
        assert!(!apply_header_fields("Supplier : ACME Trading", &mut ctx));
        assert_eq!(ctx, PoContext::new());
    }
}
