//! Fixed-capacity item container carried by the player.

use log::info;
use uuid::Uuid;

use crate::{GameError, Item, ItemHolder};

/// Default number of items a player can carry.
pub const DEFAULT_CAPACITY: usize = 10;

/// Returned by [`Inventory::take_item`] when there is no room left. Hands the
/// refused item back so it can go where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryFull(pub Item);

impl From<InventoryFull> for GameError {
    fn from(_: InventoryFull) -> Self {
        GameError::ContainerFull
    }
}

/// An ordered bag of items that never holds more than `capacity` of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    capacity: usize,
    items: Vec<Item>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Store an item.
    ///
    /// # Errors
    /// - `InventoryFull` carrying the item back if the inventory is at capacity
    pub fn take_item(&mut self, item: Item) -> Result<(), InventoryFull> {
        if self.is_full() {
            info!("inventory full ({}/{}), refused '{}'", self.len(), self.capacity, item.name);
            return Err(InventoryFull(item));
        }
        self.items.push(item);
        Ok(())
    }

    /// Names of carried items, in the order they were picked up.
    pub fn item_names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }
}

impl ItemHolder for Inventory {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn remove_item(&mut self, item_id: Uuid) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == item_id)?;
        Some(self.items.remove(index))
    }
}
