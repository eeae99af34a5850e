//! Mutation engine: a pure reducer over the canonical item list.
//!
//! Every mutation goes through [`apply`]; the function never touches
//! shared state and always returns a fresh list, so the host can chain
//! "persist after mutate" at its single dispatch point.

use freezer_model::Item;
use freezer_model::datetime::months_from_now;

/// A mutation command against the canonical item list.
///
/// Commands are total: unknown ids make the matching commands no-ops,
/// never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append an item; the engine assigns the next free id.
    Add(Item),
    /// Mark an item deleted and schedule it for purge after the
    /// retention window.
    SoftDelete {
        id: u64,
        months_to_keep_deleted_items: u32,
    },
    /// Replace the item with the matching id verbatim (no field merge).
    Update(Item),
    /// Discard the current list and adopt this one; used on session load.
    Replace(Vec<Item>),
}

/// Applies one command to the item list, producing the next list.
pub fn apply(items: &[Item], command: &Command) -> Vec<Item> {
    match command {
        Command::Add(item) => {
            let next_id = items.iter().map(|existing| existing.id).max().unwrap_or(0) + 1;
            let mut next = items.to_vec();
            next.push(Item {
                id: next_id,
                ..item.clone()
            });
            next
        }

        Command::SoftDelete {
            id,
            months_to_keep_deleted_items,
        } => {
            let Some(target) = items.iter().find(|item| item.id == *id) else {
                return items.to_vec();
            };
            if target.is_deleted {
                return items.to_vec();
            }
            // The deleted item moves to the end of the list, flagged with
            // its purge-eligibility date.
            let mut next: Vec<Item> = items
                .iter()
                .filter(|item| item.id != *id)
                .cloned()
                .collect();
            next.push(Item {
                is_deleted: true,
                deleted_on: Some(months_from_now(*months_to_keep_deleted_items)),
                ..target.clone()
            });
            next
        }

        Command::Update(item) => items
            .iter()
            .map(|existing| {
                if existing.id == item.id {
                    item.clone()
                } else {
                    existing.clone()
                }
            })
            .collect(),

        Command::Replace(new_items) => new_items.clone(),
    }
}
