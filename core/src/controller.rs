//! The list controller — binds the store to a rendered row list and
//! dispatches user intents.
//!
//! The controller owns the store and its storage slot. Every mutation
//! follows the same synchronous path: mutate the store, persist, then
//! rebuild the row models from scratch (no diffing). The one exception
//! is toggling a completion flag, which persists and then flips the
//! affected row's marker in place.
//!
//! Anything that needs a user's answer mid-handler (edit text,
//! clear-all confirmation) goes through an injected [`Prompter`], so
//! the controller runs unmodified under a terminal UI, a stdin CLI, or
//! a scripted test harness.

use crate::storage::{StorageError, StorageSlot};
use crate::store::TodoStore;
use crate::types::ItemId;

// ---------------------------------------------------------------------------
// Prompter
// ---------------------------------------------------------------------------

/// Blocking user-prompt capability required by the edit and clear-all
/// handlers.
pub trait Prompter {
    /// Ask for a single line of text, seeded with the current value.
    /// Returns `None` on cancellation.
    fn prompt_text(&mut self, prompt: &str, seed: &str) -> Option<String>;

    /// Ask a yes/no question. Returns `true` only on explicit
    /// confirmation.
    fn confirm(&mut self, prompt: &str) -> bool;
}

// ---------------------------------------------------------------------------
// Row
// ---------------------------------------------------------------------------

/// Render model for one displayed item.
///
/// `done` mirrors the checkbox state; `completed` is the row-level
/// visual marker. They only diverge conceptually — a full render and an
/// in-place toggle both keep them equal — but surfaces style them
/// independently (checkbox glyph vs. crossed-out text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: ItemId,
    pub text: String,
    pub done: bool,
    pub completed: bool,
}

// ---------------------------------------------------------------------------
// ListController
// ---------------------------------------------------------------------------

/// Binds a [`TodoStore`] to an ordered list of [`Row`]s and handles the
/// five user intents: add, toggle, edit, delete, clear-all.
pub struct ListController<S: StorageSlot> {
    store: TodoStore,
    slot: S,
    rows: Vec<Row>,
    clear_enabled: bool,
}

impl<S: StorageSlot> ListController<S> {
    /// Load the store from the slot and render the initial row list.
    pub fn new(slot: S) -> Self {
        let store = TodoStore::load(&slot);
        let mut controller = ListController {
            store,
            slot,
            rows: Vec::new(),
            clear_enabled: false,
        };
        controller.render();
        controller
    }

    /// Current row models, in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Whether the clear-all action is currently enabled.
    pub fn clear_enabled(&self) -> bool {
        self.clear_enabled
    }

    /// The underlying store (read-only; mutations go through handlers).
    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// The storage slot backing this controller.
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Rebuild every row from the store and recompute clear-all
    /// enablement. Full rebuild, no diffing.
    fn render(&mut self) {
        self.rows = self
            .store
            .items()
            .iter()
            .map(|item| Row {
                id: item.id,
                text: item.text.clone(),
                done: item.done,
                completed: item.done,
            })
            .collect();
        self.clear_enabled = !self.store.is_empty();
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        self.store.persist(&mut self.slot)
    }

    // -------------------------------------------------------------------
    // Handlers
    // -------------------------------------------------------------------

    /// Add intent: trim the entry text; if non-empty, append, persist,
    /// and re-render. Returns `true` if an item was added (the caller
    /// should clear its entry field).
    pub fn add(&mut self, entry: &str) -> Result<bool, StorageError> {
        if self.store.append(entry).is_none() {
            return Ok(false);
        }
        self.persist()?;
        self.render();
        Ok(true)
    }

    /// Toggle the completion flag of the item behind a row, persist,
    /// and flip the row's marker in place without a full re-render.
    /// Out-of-range rows are a no-op.
    pub fn toggle(&mut self, row: usize) -> Result<(), StorageError> {
        let (id, new_done) = match self.rows.get(row) {
            Some(r) => (r.id, !r.done),
            None => return Ok(()),
        };
        if !self.store.set_done(id, new_done) {
            return Ok(());
        }
        self.persist()?;
        let r = &mut self.rows[row];
        r.done = new_done;
        r.completed = new_done;
        Ok(())
    }

    /// Edit intent: prompt for replacement text seeded with the row's
    /// current text. A cancelled or empty answer leaves the item
    /// unchanged; a non-empty answer is applied, persisted, and
    /// re-rendered.
    pub fn edit(
        &mut self,
        row: usize,
        prompter: &mut dyn Prompter,
    ) -> Result<(), StorageError> {
        let (id, current) = match self.rows.get(row) {
            Some(r) => (r.id, r.text.clone()),
            None => return Ok(()),
        };
        let answer = match prompter.prompt_text("Enter new text for this todo", &current) {
            Some(text) => text,
            None => return Ok(()),
        };
        if !self.store.set_text(id, &answer) {
            return Ok(());
        }
        self.persist()?;
        self.render();
        Ok(())
    }

    /// Delete intent: remove the item behind a row, persist, and
    /// re-render. Out-of-range rows are a no-op.
    pub fn delete(&mut self, row: usize) -> Result<(), StorageError> {
        let id = match self.rows.get(row) {
            Some(r) => r.id,
            None => return Ok(()),
        };
        if !self.store.remove(id) {
            return Ok(());
        }
        self.persist()?;
        self.render();
        Ok(())
    }

    /// Clear-all intent: inert while disabled; otherwise ask for
    /// confirmation and, if granted, empty the store, persist, and
    /// re-render (which disables the action). Returns `true` if the
    /// store was cleared.
    pub fn clear_all(&mut self, prompter: &mut dyn Prompter) -> Result<bool, StorageError> {
        if !self.clear_enabled {
            return Ok(false);
        }
        if !prompter.confirm("Are you sure you want to delete everything?") {
            return Ok(false);
        }
        self.store.clear();
        self.persist()?;
        self.render();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemorySlot, StorageSlot};

    /// Scripted prompter: fixed answers, records what was asked.
    struct MockPrompter {
        text_answer: Option<String>,
        confirm_answer: bool,
        asked: Vec<String>,
    }

    impl MockPrompter {
        fn text(answer: Option<&str>) -> Self {
            MockPrompter {
                text_answer: answer.map(String::from),
                confirm_answer: false,
                asked: Vec::new(),
            }
        }

        fn confirming(answer: bool) -> Self {
            MockPrompter {
                text_answer: None,
                confirm_answer: answer,
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for MockPrompter {
        fn prompt_text(&mut self, prompt: &str, seed: &str) -> Option<String> {
            self.asked.push(format!("{} [{}]", prompt, seed));
            self.text_answer.clone()
        }

        fn confirm(&mut self, prompt: &str) -> bool {
            self.asked.push(prompt.to_string());
            self.confirm_answer
        }
    }

    fn controller_with(items: &[(&str, bool)]) -> ListController<MemorySlot> {
        let mut controller = ListController::new(MemorySlot::new());
        for (text, done) in items {
            controller.add(text).unwrap();
            if *done {
                let row = controller.rows().len() - 1;
                controller.toggle(row).unwrap();
            }
        }
        controller
    }

    #[test]
    fn new_loads_existing_slot_value() {
        let slot = MemorySlot::with_value(r#"[{"text":"A","done":true},{"text":"B","done":false}]"#);
        let controller = ListController::new(slot);
        assert_eq!(controller.rows().len(), 2);
        assert!(controller.rows()[0].completed);
        assert!(!controller.rows()[1].completed);
        assert!(controller.clear_enabled());
    }

    #[test]
    fn new_with_empty_slot_renders_nothing() {
        let controller = ListController::new(MemorySlot::new());
        assert!(controller.rows().is_empty());
        assert!(!controller.clear_enabled());
    }

    #[test]
    fn add_trims_persists_and_renders() {
        let mut controller = ListController::new(MemorySlot::new());
        assert!(controller.add("  Buy milk  ").unwrap());
        assert_eq!(controller.rows().len(), 1);
        assert_eq!(controller.rows()[0].text, "Buy milk");
        assert!(controller.clear_enabled());
        assert_eq!(
            controller.slot().read().unwrap().as_deref(),
            Some(r#"[{"text":"Buy milk","done":false}]"#)
        );
    }

    #[test]
    fn add_whitespace_only_is_noop() {
        let mut controller = ListController::new(MemorySlot::new());
        assert!(!controller.add("   ").unwrap());
        assert!(controller.rows().is_empty());
        // Nothing was persisted either.
        assert_eq!(controller.slot().read().unwrap(), None);
    }

    #[test]
    fn toggle_flips_marker_in_place_and_persists() {
        let mut controller = controller_with(&[("A", false), ("B", false)]);
        controller.toggle(0).unwrap();
        assert!(controller.rows()[0].done);
        assert!(controller.rows()[0].completed);
        assert!(!controller.rows()[1].done);
        let persisted = controller.slot().read().unwrap().unwrap();
        assert!(persisted.contains(r#"{"text":"A","done":true}"#));
    }

    #[test]
    fn toggle_out_of_range_is_noop() {
        let mut controller = controller_with(&[("A", false)]);
        controller.toggle(5).unwrap();
        assert!(!controller.rows()[0].done);
    }

    #[test]
    fn edit_applies_nonempty_answer() {
        let mut controller = controller_with(&[("A", false)]);
        let mut prompter = MockPrompter::text(Some("B"));
        controller.edit(0, &mut prompter).unwrap();
        assert_eq!(controller.rows()[0].text, "B");
        assert_eq!(prompter.asked, vec!["Enter new text for this todo [A]"]);
        let persisted = controller.slot().read().unwrap().unwrap();
        assert!(persisted.contains(r#""text":"B""#));
    }

    #[test]
    fn edit_cancel_leaves_item_unchanged() {
        let mut controller = controller_with(&[("A", false)]);
        let mut prompter = MockPrompter::text(None);
        controller.edit(0, &mut prompter).unwrap();
        assert_eq!(controller.rows()[0].text, "A");
    }

    #[test]
    fn edit_empty_answer_leaves_item_unchanged() {
        let mut controller = controller_with(&[("A", false)]);
        let mut prompter = MockPrompter::text(Some(""));
        controller.edit(0, &mut prompter).unwrap();
        assert_eq!(controller.rows()[0].text, "A");
    }

    #[test]
    fn delete_shifts_rows_and_persists() {
        let mut controller = controller_with(&[("A", false), ("B", false), ("C", false)]);
        controller.delete(1).unwrap();
        let texts: Vec<&str> = controller.rows().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "C"]);
        assert_eq!(
            controller.slot().read().unwrap().as_deref(),
            Some(r#"[{"text":"A","done":false},{"text":"C","done":false}]"#)
        );
    }

    #[test]
    fn clear_all_is_inert_when_disabled() {
        let mut controller = ListController::new(MemorySlot::new());
        let mut prompter = MockPrompter::confirming(true);
        assert!(!controller.clear_all(&mut prompter).unwrap());
        // Disabled clear-all never even asks.
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn clear_all_denied_changes_nothing() {
        let mut controller = controller_with(&[("A", false)]);
        let mut prompter = MockPrompter::confirming(false);
        assert!(!controller.clear_all(&mut prompter).unwrap());
        assert_eq!(controller.rows().len(), 1);
        assert!(controller.clear_enabled());
    }

    #[test]
    fn clear_all_confirmed_empties_and_disables() {
        let mut controller = controller_with(&[("A", false), ("B", true)]);
        let mut prompter = MockPrompter::confirming(true);
        assert!(controller.clear_all(&mut prompter).unwrap());
        assert!(controller.rows().is_empty());
        assert!(!controller.clear_enabled());
        assert_eq!(controller.slot().read().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn reload_after_mutations_round_trips() {
        let mut controller = controller_with(&[("Buy milk", true), ("Walk dog", false)]);
        controller.delete(1).unwrap();
        let slot = controller.slot().clone();
        let reloaded = ListController::new(slot);
        assert_eq!(reloaded.rows().len(), 1);
        assert_eq!(reloaded.rows()[0].text, "Buy milk");
        assert!(reloaded.rows()[0].done);
    }
}
