//! Regex patterns for the vendor's fixed PO template.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Header fields
    pub static ref PO_NUMBER: Regex = Regex::new(
        r"PO No\.:\s*(\d+)"
    ).unwrap();

    // Store line with a 3-digit store ID after a hyphen:
    //   "Store : Example Mart - 011"
    pub static ref STORE_WITH_ID: Regex = Regex::new(
        r"Store :\s*(.*?)\s*-\s*(\d{3})\b"
    ).unwrap();

    // Fallback for store lines without the hyphen/ID suffix.
    pub static ref STORE_NAME_ONLY: Regex = Regex::new(
        r"Store :\s*(\S.*?)\s*$"
    ).unwrap();

    pub static ref ORDER_DATE: Regex = Regex::new(
        r"Order Date :\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref DELIVERY_DATE: Regex = Regex::new(
        r"Delivery Date \(on or before\) :\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // Item table rows start with a 6-digit item/reference code.
    pub static ref ITEM_CODE: Regex = Regex::new(
        r"^\d{6}$"
    ).unwrap();

    // Quantity/price/total columns: plain decimals with two fraction digits.
    pub static ref DECIMAL_TOKEN: Regex = Regex::new(
        r"^\d+\.\d{2}$"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_po_number_pattern() {
        let caps = PO_NUMBER.captures("PO No.: 4520118").unwrap();
        assert_eq!(&caps[1], "4520118");
        assert!(PO_NUMBER.captures("PO No: 123").is_none());
    }

    #[test]
    fn test_store_patterns() {
        let caps = STORE_WITH_ID.captures("Store : Example Mart - 011").unwrap();
        assert_eq!(&caps[1], "Example Mart");
        assert_eq!(&caps[2], "011");

        // Two-digit suffix is not a store ID
        assert!(STORE_WITH_ID.captures("Store : Corner Shop - 42").is_none());

        let caps = STORE_NAME_ONLY.captures("Store : Corner Shop  ").unwrap();
        assert_eq!(&caps[1], "Corner Shop");
    }

    #[test]
    fn test_date_patterns() {
        let caps = ORDER_DATE.captures("Order Date : 05/01/2024").unwrap();
        assert_eq!(&caps[1], "05/01/2024");

        let caps = DELIVERY_DATE
            .captures("Delivery Date (on or before) : 12/01/2024")
            .unwrap();
        assert_eq!(&caps[1], "12/01/2024");
    }

    #[test]
    fn test_item_code_is_exactly_six_digits() {
        assert!(ITEM_CODE.is_match("123456"));
        assert!(!ITEM_CODE.is_match("12345"));
        assert!(!ITEM_CODE.is_match("1234567"));
        assert!(!ITEM_CODE.is_match("12345a"));
    }

    #[test]
    fn test_decimal_token_shape() {
        assert!(DECIMAL_TOKEN.is_match("5.00"));
        assert!(DECIMAL_TOKEN.is_match("1250.75"));
        assert!(!DECIMAL_TOKEN.is_match("5.0"));
        assert!(!DECIMAL_TOKEN.is_match("5.000"));
        assert!(!DECIMAL_TOKEN.is_match(".50"));
        assert!(!DECIMAL_TOKEN.is_match("5"));
    }
}
