//! In-memory item store.
//!
//! Sole owner of the item collection. Items are append-only: no update or
//! delete exists, and the collection lives only as long as the process.

use crate::error::StoreError;
use crate::store::item::{Item, NewItem};

/// In-memory item collection with monotonic ID assignment.
#[derive(Debug)]
pub struct ItemStore {
    items: Vec<Item>,
    // Next ID to assign. Starts at 1 and only ever increments, so IDs are
    // strictly increasing and never reused.
    next_id: i64,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// All items in insertion order. Empty when nothing has been created.
    pub fn list(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Look up an item by exact ID. Absence is a normal outcome, not an error.
    pub fn get(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Create a new item, assigning the next ID and appending it to the
    /// collection. Fails without mutating anything when `name` is empty.
    pub fn create(&mut self, new_item: NewItem) -> Result<Item, StoreError> {
        if new_item.name.is_empty() {
            return Err(StoreError::NameRequired);
        }

        let item = Item {
            id: self.next_id,
            name: new_item.name,
            description: new_item.description,
        };
        self.next_id += 1;
        self.items.push(item.clone());

        Ok(item)
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
