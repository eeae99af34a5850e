//! Stable multi-key sorting with direction-toggle memory.

use std::cmp::Ordering;

use freezer_model::{Item, SortDirection, SortField};

/// A derived, ordered view of the item list.
///
/// Never mutated in place: every [`reduce_sorted`] call produces a new
/// view. Not persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortedView {
    pub items: Vec<Item>,
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortedView {
    /// Empty view sorted ascending by description.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Input to the sort reducer.
#[derive(Debug, Clone)]
pub enum SortAction {
    /// A new item list arrived (e.g. from filtering); re-sort it with
    /// the current field and direction.
    Update(Vec<Item>),
    /// Sort by the given field, toggling direction when the field is
    /// already active.
    Sort(SortField),
}

/// Applies a sort action, producing the next view.
///
/// Toggle rule: a different field resets to ascending; repeating the
/// active field flips the direction.
pub fn reduce_sorted(view: &SortedView, action: SortAction) -> SortedView {
    let mut field = view.field;
    let mut direction = view.direction;

    let mut items = match action {
        SortAction::Update(new_items) => new_items,
        SortAction::Sort(requested) => {
            direction = if requested == field {
                direction.toggled()
            } else {
                SortDirection::Ascending
            };
            field = requested;
            view.items.clone()
        }
    };

    sort_items(&mut items, field, direction);
    SortedView {
        items,
        field,
        direction,
    }
}

/// Stable sort by `field`. Descending swaps the comparator operands,
/// which keeps equal-key runs in the same relative order as ascending.
pub fn sort_items(items: &mut [Item], field: SortField, direction: SortDirection) {
    items.sort_by(|left, right| match direction {
        SortDirection::Ascending => compare(field, left, right),
        SortDirection::Descending => compare(field, right, left),
    });
}

fn compare(field: SortField, left: &Item, right: &Item) -> Ordering {
    match field {
        SortField::Description => compare_text(&left.description, &right.description),
        SortField::Type => compare_text(&left.category, &right.category),
        SortField::Unit => left
            .unit
            .ordinal()
            .cmp(&right.unit.ordinal())
            .then_with(|| left.amount.cmp(&right.amount)),
        SortField::Frozen => left.frozen.cmp(&right.frozen),
        SortField::Expiration => left.expiration.cmp(&right.expiration),
    }
}

// Case-folded lexicographic comparison; stands in for locale collation.
fn compare_text(left: &str, right: &str) -> Ordering {
    left.to_lowercase().cmp(&right.to_lowercase())
}
