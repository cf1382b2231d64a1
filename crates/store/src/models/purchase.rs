//! Purchase history records.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use sakura_core::{Price, SizeCode};

use super::timestamp;

pub use super::timestamp::FORMAT as TIMESTAMP_FORMAT;

/// Whether a history record describes a sale or a return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseKind {
    #[default]
    Purchase,
    Return,
}

impl PurchaseKind {
    /// Capitalized label for history display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Purchase => "Purchase",
            Self::Return => "Return",
        }
    }
}

/// One line of a history record: what was bought or returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItem {
    /// Product name at the time of the transaction.
    pub name: String,
    /// Unit price at the time of the transaction.
    pub price: Price,
    /// Units bought or returned.
    pub quantity: u32,
    /// Size bought or returned.
    pub size: SizeCode,
}

/// One completed transaction in the purchase history file.
///
/// Records older than the `type` field deserialize as purchases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// When the transaction completed, in the file's local-time format.
    #[serde(with = "timestamp::required")]
    pub timestamp: DateTime<Local>,
    /// Sale or return.
    #[serde(rename = "type", default)]
    pub kind: PurchaseKind,
    /// The transaction's lines.
    pub items: Vec<PurchaseItem>,
}

impl PurchaseRecord {
    /// Create a record stamped with the current local time.
    #[must_use]
    pub fn now(kind: PurchaseKind, items: Vec<PurchaseItem>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            items,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item() -> PurchaseItem {
        PurchaseItem {
            name: "T-Shirt".to_owned(),
            price: Price::new(Decimal::new(2_500_00, 2)),
            quantity: 4,
            size: SizeCode::parse("M").unwrap(),
        }
    }

    #[test]
    fn test_serde_shape() {
        let record = PurchaseRecord::now(PurchaseKind::Purchase, vec![item()]);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["type"], "purchase");
        assert!(json["timestamp"].is_string());
        assert_eq!(json["items"][0]["name"], "T-Shirt");
        assert_eq!(json["items"][0]["quantity"], 4);
        assert_eq!(json["items"][0]["size"], "M");
    }

    #[test]
    fn test_missing_type_defaults_to_purchase() {
        let record: PurchaseRecord = serde_json::from_str(
            r#"{
                "timestamp": "07/15/2025 03:41:09 PM",
                "items": [
                    {"name": "Jeans", "price": 4890.0, "quantity": 1, "size": "L"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(record.kind, PurchaseKind::Purchase);
        assert_eq!(record.items.len(), 1);
    }

    #[test]
    fn test_roundtrip_preserves_timestamp() {
        let record = PurchaseRecord::now(PurchaseKind::Return, vec![item()]);
        let json = serde_json::to_string(&record).unwrap();
        let back: PurchaseRecord = serde_json::from_str(&json).unwrap();

        // Sub-second precision is not part of the file format.
        assert_eq!(
            back.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            record.timestamp.format(TIMESTAMP_FORMAT).to_string()
        );
        assert_eq!(back.kind, PurchaseKind::Return);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(PurchaseKind::Purchase.label(), "Purchase");
        assert_eq!(PurchaseKind::Return.label(), "Return");
    }
}
