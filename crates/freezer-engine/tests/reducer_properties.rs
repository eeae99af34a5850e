//! Property-based tests for the mutation reducer.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use freezer_engine::reducer::{Command, apply};
use freezer_model::{Item, Unit};

fn unit_strategy() -> impl Strategy<Value = Unit> {
    prop_oneof![
        Just(Unit::Gram),
        Just(Unit::Pieces),
        Just(Unit::Portions),
    ]
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (
        0u64..50,
        "[A-Za-z ]{1,12}",
        "[A-Za-z]{0,8}",
        1u32..2000,
        unit_strategy(),
        0i64..3650,
        prop::bool::ANY,
    )
        .prop_map(
            |(id, description, category, amount, unit, day_offset, is_deleted)| {
                let base = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
                let day = base + chrono::Duration::days(day_offset);
                Item {
                    id,
                    description,
                    category,
                    amount,
                    unit,
                    frozen: day,
                    expiration: day,
                    created: day,
                    is_deleted,
                    deleted_on: is_deleted.then_some(day),
                }
            },
        )
}

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(item_strategy(), 0..12)
}

proptest! {
    #[test]
    fn add_assigns_strictly_greater_id(items in items_strategy(), new_item in item_strategy()) {
        let next = apply(&items, &Command::Add(new_item));

        prop_assert_eq!(next.len(), items.len() + 1);
        let assigned = next.last().unwrap().id;
        for existing in &items {
            prop_assert!(assigned > existing.id);
        }
    }

    #[test]
    fn soft_delete_is_idempotent(items in items_strategy(), id in 0u64..60) {
        let delete = Command::SoftDelete { id, months_to_keep_deleted_items: 0 };
        let once = apply(&items, &delete);
        let twice = apply(&once, &delete);

        prop_assert_eq!(once.len(), twice.len());
        // deleted_on is stamped from the wall clock, so compare
        // everything except the timestamp of the re-deleted candidate.
        for (a, b) in once.iter().zip(twice.iter()) {
            prop_assert_eq!(a.id, b.id);
            prop_assert_eq!(a.is_deleted, b.is_deleted);
            prop_assert_eq!(&a.description, &b.description);
        }
    }

    #[test]
    fn soft_delete_absent_id_is_identity(items in items_strategy()) {
        let absent = items.iter().map(|item| item.id).max().unwrap_or(0) + 100;
        let next = apply(&items, &Command::SoftDelete {
            id: absent,
            months_to_keep_deleted_items: 3,
        });
        prop_assert_eq!(next, items);
    }

    #[test]
    fn update_preserves_length(items in items_strategy(), candidate in item_strategy()) {
        let next = apply(&items, &Command::Update(candidate.clone()));
        prop_assert_eq!(next.len(), items.len());

        if items.iter().any(|item| item.id == candidate.id) {
            prop_assert!(next.contains(&candidate));
        } else {
            prop_assert_eq!(next, items);
        }
    }

    #[test]
    fn replace_adopts_list_regardless_of_prior_state(
        items in items_strategy(),
        incoming in items_strategy(),
    ) {
        let next = apply(&items, &Command::Replace(incoming.clone()));
        prop_assert_eq!(next, incoming);
    }

    #[test]
    fn item_round_trips_through_json(item in item_strategy()) {
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, item);
    }
}
