//! The single dispatch point over the canonical item list.

use freezer_model::Item;
use tracing::debug;

use crate::reducer::{Command, apply};

/// Owns the authoritative item list for the duration of a session.
///
/// All mutations flow through [`InventoryStore::dispatch`], which
/// returns the post-mutation snapshot so the host can chain a persist
/// against exactly the state the mutation produced.
#[derive(Debug, Default)]
pub struct InventoryStore {
    items: Vec<Item>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current canonical list.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Applies one command and returns the resulting snapshot.
    pub fn dispatch(&mut self, command: &Command) -> &[Item] {
        debug!(?command, count = self.items.len(), "dispatching command");
        self.items = apply(&self.items, command);
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use freezer_model::Unit;

    #[test]
    fn test_dispatch_chains_commands() {
        let mut store = InventoryStore::new();
        let now = Utc::now();
        let fish = Item::new("Fish", "Seafood", 2, Unit::Pieces, now, now);

        store.dispatch(&Command::Add(fish.clone()));
        store.dispatch(&Command::Add(fish));
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.items()[1].id, 2);

        store.dispatch(&Command::Replace(Vec::new()));
        assert!(store.items().is_empty());
    }
}
