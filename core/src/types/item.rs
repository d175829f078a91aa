use serde::{Deserialize, Serialize};

/// Stable identity of an item within one store lifetime.
///
/// Ids are assigned by the store (on load and on append) and are never
/// reused while the store lives. They are not persisted: the stored form
/// is a plain ordered array, and ids are re-assigned on the next load.
pub type ItemId = u64;

/// One todo entry: display text plus a completion flag.
///
/// The serialized form is exactly `{"text": ..., "done": ...}` — the
/// `id` field is skipped so the persisted array stays a flat list of
/// text/done pairs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    #[serde(skip)]
    pub id: ItemId,
    pub text: String,
    pub done: bool,
}

impl Item {
    /// Create a new, not-yet-done item.
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Item {
            id,
            text: text.into(),
            done: false,
        }
    }
}
