//! The ordered, persistable todo item sequence.
//!
//! `TodoStore` is the authoritative list. Mutations are keyed by stable
//! item id rather than display position; callers holding a position
//! resolve it through [`TodoStore::get`] / [`TodoStore::position_of`].
//! The store itself does not persist automatically — the controller
//! calls [`TodoStore::persist`] after every mutation.

use crate::storage::{StorageError, StorageSlot};
use crate::types::{Item, ItemId};

// ---------------------------------------------------------------------------
// TodoStore
// ---------------------------------------------------------------------------

/// Ordered collection of todo items with id-keyed mutation.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    items: Vec<Item>,
    next_id: ItemId,
}

impl TodoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TodoStore {
            items: Vec::new(),
            next_id: 0,
        }
    }

    /// Load the store from a slot.
    ///
    /// A missing value or a value that fails to parse both yield an
    /// empty store; load never fails. Ids are assigned fresh in
    /// sequence order.
    pub fn load(slot: &impl StorageSlot) -> Self {
        let raw = match slot.read() {
            Ok(Some(raw)) => raw,
            _ => return TodoStore::new(),
        };
        let parsed: Vec<Item> = match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(_) => return TodoStore::new(),
        };
        let mut store = TodoStore::new();
        for mut item in parsed {
            item.id = store.next_id;
            store.next_id += 1;
            store.items.push(item);
        }
        store
    }

    /// Serialize the full sequence and overwrite the slot.
    pub fn persist(&self, slot: &mut impl StorageSlot) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.items)
            .map_err(|e| StorageError::SerializeError(e.to_string()))?;
        slot.write(&json)
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    /// All items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at a display position.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Display position of an item id, if it is still in the store.
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // -------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------

    /// Append a new item with the trimmed text, `done = false`.
    ///
    /// Text that is empty after trimming is rejected: nothing is
    /// appended and `None` is returned.
    pub fn append(&mut self, text: &str) -> Option<ItemId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item::new(id, trimmed));
        Some(id)
    }

    /// Set the completion flag of an item. Unknown id is a no-op
    /// returning `false`.
    pub fn set_done(&mut self, id: ItemId, done: bool) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.done = done;
                true
            }
            None => false,
        }
    }

    /// Replace the text of an item with the trimmed replacement.
    ///
    /// Text that is empty after trimming (a cancelled edit) leaves the
    /// item unchanged. Unknown id is a no-op. Returns `true` only if
    /// the text was actually replaced.
    pub fn set_text(&mut self, id: ItemId, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = trimmed.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove one item, shifting subsequent items left. Unknown id is
    /// a no-op returning `false`.
    pub fn remove(&mut self, id: ItemId) -> bool {
        match self.position_of(id) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlot;

    #[test]
    fn append_trims_and_defaults_undone() {
        let mut store = TodoStore::new();
        let id = store.append("  Buy milk  ").unwrap();
        let item = store.get(0).unwrap();
        assert_eq!(item.id, id);
        assert_eq!(item.text, "Buy milk");
        assert!(!item.done);
    }

    #[test]
    fn append_whitespace_only_is_noop() {
        let mut store = TodoStore::new();
        assert_eq!(store.append("   "), None);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut store = TodoStore::new();
        let a = store.append("A").unwrap();
        store.remove(a);
        let b = store.append("B").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn set_text_applies_nonempty() {
        let mut store = TodoStore::new();
        let id = store.append("A").unwrap();
        assert!(store.set_text(id, "B"));
        assert_eq!(store.get(0).unwrap().text, "B");
        assert!(!store.get(0).unwrap().done);
    }

    #[test]
    fn set_text_empty_leaves_item_unchanged() {
        let mut store = TodoStore::new();
        let id = store.append("A").unwrap();
        assert!(!store.set_text(id, ""));
        assert!(!store.set_text(id, "  "));
        assert_eq!(store.get(0).unwrap().text, "A");
    }

    #[test]
    fn remove_shifts_subsequent_items_left() {
        let mut store = TodoStore::new();
        store.append("A");
        let b = store.append("B").unwrap();
        store.append("C");
        assert!(store.remove(b));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().text, "A");
        assert_eq!(store.get(1).unwrap().text, "C");
    }

    #[test]
    fn unknown_id_mutations_are_noops() {
        let mut store = TodoStore::new();
        store.append("A");
        assert!(!store.set_done(99, true));
        assert!(!store.set_text(99, "B"));
        assert!(!store.remove(99));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().text, "A");
    }

    #[test]
    fn toggle_is_idempotent_and_reversible() {
        let mut store = TodoStore::new();
        let id = store.append("A").unwrap();
        store.set_done(id, true);
        store.set_done(id, true);
        assert!(store.get(0).unwrap().done);
        store.set_done(id, false);
        assert!(!store.get(0).unwrap().done);
    }

    #[test]
    fn persist_then_load_round_trips() {
        let mut slot = MemorySlot::new();
        let mut store = TodoStore::new();
        store.append("Buy milk");
        let b = store.append("Walk dog").unwrap();
        store.set_done(b, true);
        store.persist(&mut slot).unwrap();

        let reloaded = TodoStore::load(&slot);
        assert_eq!(reloaded.items(), store.items());
    }

    #[test]
    fn load_missing_value_yields_empty() {
        let store = TodoStore::load(&MemorySlot::new());
        assert!(store.is_empty());
    }

    #[test]
    fn load_garbage_yields_empty() {
        let store = TodoStore::load(&MemorySlot::with_value("not json at all"));
        assert!(store.is_empty());
        let store = TodoStore::load(&MemorySlot::with_value(r#"{"text":"obj not array"}"#));
        assert!(store.is_empty());
    }

    #[test]
    fn end_to_end_scenario_persists_expected_state() {
        let mut slot = MemorySlot::new();
        let mut store = TodoStore::new();
        let milk = store.append("Buy milk").unwrap();
        let dog = store.append("Walk dog").unwrap();
        store.set_done(milk, true);
        store.remove(dog);
        store.persist(&mut slot).unwrap();

        assert_eq!(
            slot.read().unwrap().as_deref(),
            Some(r#"[{"text":"Buy milk","done":true}]"#)
        );
    }
}
