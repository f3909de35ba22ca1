//! Purchase-order context and line-item record types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Date format used throughout the vendor PO template (`DD/MM/YYYY`).
///
/// Dates are parsed with this format and rendered back with it, so the
/// textual form in the output matches the document exactly.
pub const PO_DATE_FORMAT: &str = "%d/%m/%Y";

/// Header fields accumulated while scanning one document.
///
/// The context is scoped to a single document and carried across its pages.
/// Each field is set at most once: the first header line that matches wins,
/// later matches for the same field are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoContext {
    /// PO number as printed (digits only, uncoerced).
    pub po_number: Option<String>,

    /// Store name from the `Store :` header.
    pub store_name: Option<String>,

    /// 3-digit store identifier, leading zeros preserved.
    pub store_id: Option<String>,

    /// Order date from the header block.
    pub order_date: Option<NaiveDate>,

    /// Delivery date (on or before) from the header block.
    pub delivery_date: Option<NaiveDate>,
}

impl PoContext {
    /// Create an empty context for a new document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a PO number has been seen yet. Item rows encountered before
    /// the first `PO No.:` header are dropped.
    pub fn has_po_number(&self) -> bool {
        self.po_number.is_some()
    }

    pub(crate) fn set_po_number(&mut self, value: String) {
        self.po_number.get_or_insert(value);
    }

    pub(crate) fn set_store(&mut self, name: String, id: Option<String>) {
        if self.store_name.is_none() {
            self.store_name = Some(name);
            self.store_id = id;
        }
    }

    pub(crate) fn set_order_date(&mut self, value: NaiveDate) {
        self.order_date.get_or_insert(value);
    }

    pub(crate) fn set_delivery_date(&mut self, value: NaiveDate) {
        self.delivery_date.get_or_insert(value);
    }
}

/// One extracted purchase-order line item.
///
/// Carries a by-value snapshot of the document context at the moment the
/// item row was matched; later header lines never affect emitted records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemRecord {
    /// PO number as printed. Always present: rows without a preceding
    /// `PO No.:` header are never emitted.
    pub po_number: String,

    /// Store name, when the `Store :` header was seen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,

    /// 3-digit store identifier, when present in the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,

    /// Order date.
    #[serde(with = "po_date_opt", default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<NaiveDate>,

    /// Delivery date (on or before).
    #[serde(with = "po_date_opt", default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,

    /// Item/reference code (6 leading digits).
    pub item_code: String,

    /// Ordered quantity. `None` only under the lenient short-row policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered_qty: Option<Decimal>,

    /// Unit price. `None` only under the lenient short-row policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

impl LineItemRecord {
    /// Build a record from an item row and a snapshot of the current context.
    ///
    /// Returns `None` when the context has no PO number yet.
    pub fn from_context(
        ctx: &PoContext,
        item_code: String,
        ordered_qty: Option<Decimal>,
        price: Option<Decimal>,
    ) -> Option<Self> {
        let po_number = ctx.po_number.clone()?;
        Some(Self {
            po_number,
            store_name: ctx.store_name.clone(),
            store_id: ctx.store_id.clone(),
            order_date: ctx.order_date,
            delivery_date: ctx.delivery_date,
            item_code,
            ordered_qty,
            price,
        })
    }
}

/// Serde helper keeping optional dates in the template's `DD/MM/YYYY` form.
mod po_date_opt {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::PO_DATE_FORMAT;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(PO_DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value {
            Some(s) => NaiveDate::parse_from_str(&s, PO_DATE_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_fields_set_once() {
        let mut ctx = PoContext::new();
        ctx.set_po_number("1001".to_string());
        ctx.set_po_number("2002".to_string());
        assert_eq!(ctx.po_number.as_deref(), Some("1001"));

        ctx.set_store("First Mart".to_string(), Some("011".to_string()));
        ctx.set_store("Second Mart".to_string(), Some("022".to_string()));
        assert_eq!(ctx.store_name.as_deref(), Some("First Mart"));
        assert_eq!(ctx.store_id.as_deref(), Some("011"));
    }

    #[test]
    fn test_record_requires_po_number() {
        let ctx = PoContext::new();
        assert!(LineItemRecord::from_context(&ctx, "123456".to_string(), None, None).is_none());
    }

    #[test]
    fn test_record_snapshots_context() {
        let mut ctx = PoContext::new();
        ctx.set_po_number("42".to_string());
        ctx.set_store("Example Mart".to_string(), Some("011".to_string()));

        let record =
            LineItemRecord::from_context(&ctx, "123456".to_string(), None, None).unwrap();

        // Mutating the context afterwards must not affect the record.
        ctx.store_name = Some("Other".to_string());
        assert_eq!(record.store_name.as_deref(), Some("Example Mart"));
        assert_eq!(record.po_number, "42");
    }

    #[test]
    fn test_date_serialized_in_template_form() {
        let record = LineItemRecord {
            po_number: "100".to_string(),
            store_name: None,
            store_id: None,
            order_date: NaiveDate::from_ymd_opt(2024, 1, 5),
            delivery_date: None,
            item_code: "123456".to_string(),
            ordered_qty: None,
            price: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"05/01/2024\""));

        let back: LineItemRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
