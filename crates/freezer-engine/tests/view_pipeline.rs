//! End-to-end engine flow: dispatch, filter, sort, classify.

use chrono::{TimeZone, Utc};

use freezer_engine::{
    Command, InventoryStore, SortAction, SortedView, Warning, classify, filter, reduce_sorted,
};
use freezer_model::{Item, SortField, Unit, WarningConfig};

fn item(description: &str, category: &str, amount: u32, unit: Unit) -> Item {
    let frozen = Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap();
    let expiration = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();
    Item::new(description, category, amount, unit, frozen, expiration)
}

#[test]
fn mutations_flow_into_the_derived_view() {
    let mut store = InventoryStore::new();
    store.dispatch(&Command::Add(item("Chicken Breast", "Meat", 500, Unit::Gram)));
    store.dispatch(&Command::Add(item("Beef Steak", "Meat", 300, Unit::Gram)));
    store.dispatch(&Command::Add(item("Fish", "Seafood", 2, Unit::Pieces)));

    // Soft-delete Beef; the default view must not show it.
    store.dispatch(&Command::SoftDelete {
        id: 2,
        months_to_keep_deleted_items: 3,
    });
    assert_eq!(store.items().len(), 3);

    let visible = filter(store.items(), "", false);
    assert_eq!(visible.len(), 2);

    let view = reduce_sorted(&SortedView::new(), SortAction::Update(visible));
    assert_eq!(view.items[0].description, "Chicken Breast");
    assert_eq!(view.items[1].description, "Fish");

    // Re-sorting by unit groups grams before pieces.
    let by_unit = reduce_sorted(&view, SortAction::Sort(SortField::Unit));
    assert_eq!(by_unit.items[0].unit, Unit::Gram);
    assert_eq!(by_unit.items[1].unit, Unit::Pieces);
}

#[test]
fn search_narrows_the_view_before_sorting() {
    let mut store = InventoryStore::new();
    store.dispatch(&Command::Add(item("Chicken Breast", "Meat", 500, Unit::Gram)));
    store.dispatch(&Command::Add(item("Fish", "Seafood", 2, Unit::Pieces)));

    let matches = filter(store.items(), "meat gram", false);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].description, "Chicken Breast");
}

#[test]
fn classification_tracks_the_reference_date() {
    let config = WarningConfig {
        months_before_first: 3,
        months_before_second: 1,
    };
    let expiration = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();

    let far_out = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
    assert_eq!(classify(expiration, far_out, &config), Warning::Ok);

    let close = Utc.with_ymd_and_hms(2025, 9, 15, 0, 0, 0).unwrap();
    assert_eq!(classify(expiration, close, &config), Warning::FirstWarning);

    let closer = Utc.with_ymd_and_hms(2025, 11, 15, 0, 0, 0).unwrap();
    assert_eq!(classify(expiration, closer, &config), Warning::SecondWarning);

    let past = Utc.with_ymd_and_hms(2025, 12, 2, 0, 0, 0).unwrap();
    assert_eq!(classify(expiration, past, &config), Warning::Expired);
}
