//! Purge projection: drops soft-deleted items whose retention elapsed.

use chrono::{DateTime, Utc};
use freezer_model::Item;

/// Returns true when the item's retention window has elapsed.
pub fn is_purgeable(item: &Item, reference: DateTime<Utc>) -> bool {
    item.is_deleted && item.deleted_on.is_some_and(|deleted_on| deleted_on <= reference)
}

/// Projects the item list without purge-eligible entries.
///
/// This is a projection, not a command: the canonical list is left
/// untouched. The sync adapter applies it before every persist so the
/// remote document never carries items past their retention window.
pub fn purge(items: &[Item], reference: DateTime<Utc>) -> Vec<Item> {
    items
        .iter()
        .filter(|item| !is_purgeable(item, reference))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use freezer_model::Unit;
    use freezer_model::datetime::months_from_now;

    fn item(id: u64, is_deleted: bool, deleted_on: Option<DateTime<Utc>>) -> Item {
        let now = Utc::now();
        Item {
            id,
            is_deleted,
            deleted_on,
            ..Item::new("Sausages", "Meat", 300, Unit::Gram, now, now)
        }
    }

    #[test]
    fn test_purge_keeps_live_and_recently_deleted_items() {
        let now = Utc::now();
        let one_second_ago = now - Duration::seconds(1);
        let items = vec![
            item(1, false, None),
            item(2, true, Some(one_second_ago)),
            item(3, true, Some(months_from_now(1))),
            item(4, true, Some(one_second_ago)),
        ];

        let kept = purge(&items, now);
        let ids: Vec<u64> = kept.iter().map(|item| item.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn test_deleted_item_without_date_is_never_purged() {
        let items = vec![item(1, true, None)];
        assert_eq!(purge(&items, Utc::now()).len(), 1);
    }
}
