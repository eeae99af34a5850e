//! The inventory item entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// A single frozen-food inventory item.
///
/// The serialized form mirrors the remote document: `description` is
/// stored as `name`, `category` as `type`, and the remaining fields use
/// camelCase. Dates are RFC 3339 strings. A soft-deleted item stays in
/// the canonical list (and the remote document) until its retention
/// window elapses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique among live items; `0` means "not yet assigned" and is
    /// replaced by the mutation engine on add.
    pub id: u64,
    /// Display text, serialized as `name`.
    #[serde(rename = "name", alias = "description")]
    pub description: String,
    /// Free-text category, serialized as `type`. May be empty.
    #[serde(rename = "type", default)]
    pub category: String,
    /// Positive quantity in `unit`.
    pub amount: u32,
    pub unit: Unit,
    /// Date the item entered storage.
    pub frozen: DateTime<Utc>,
    /// Date after which the item counts as expired.
    pub expiration: DateTime<Utc>,
    /// Immutable creation timestamp.
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub is_deleted: bool,
    /// Purge-eligibility date; meaningful only when `is_deleted` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_on: Option<DateTime<Utc>>,
}

impl Item {
    /// Creates a not-yet-assigned item (id 0) stamped with the current time.
    pub fn new(
        description: impl Into<String>,
        category: impl Into<String>,
        amount: u32,
        unit: Unit,
        frozen: DateTime<Utc>,
        expiration: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            description: description.into(),
            category: category.into(),
            amount,
            unit,
            frozen,
            expiration,
            created: Utc::now(),
            is_deleted: false,
            deleted_on: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Item {
        let day = Utc.with_ymd_and_hms(2025, 8, 10, 0, 0, 0).unwrap();
        Item {
            created: day,
            ..Item::new("Chicken Breast", "Meat", 500, Unit::Gram, day, day)
        }
    }

    #[test]
    fn test_item_serializes_with_wire_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "Chicken Breast");
        assert_eq!(json["type"], "Meat");
        assert_eq!(json["unit"], "gram");
        assert_eq!(json["isDeleted"], false);
        // deletedOn is omitted until the item is soft-deleted
        assert!(json.get("deletedOn").is_none());
    }

    #[test]
    fn test_item_round_trips() {
        let item = sample();
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_item_decodes_legacy_ordinal_unit() {
        let json = r#"{
            "id": 3,
            "name": "Fish",
            "type": "Seafood",
            "amount": 2,
            "unit": 1,
            "frozen": "2025-08-10T00:00:00Z",
            "expiration": "2025-11-10T00:00:00Z",
            "created": "2025-08-10T00:00:00Z",
            "isDeleted": false
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.unit, Unit::Pieces);
        assert_eq!(item.deleted_on, None);
    }
}
