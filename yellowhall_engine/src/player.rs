//! Player -- the one character the person at the keyboard controls.
use log::info;

use crate::inventory::InventoryFull;
use crate::{Inventory, Item, ItemHolder, room::RoomId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub description: String,
    /// The room the player is standing in. Always a valid index into the world's rooms.
    pub location: RoomId,
    pub health: u32,
    pub inventory: Inventory,
}

impl Player {
    pub fn new(name: &str, location: RoomId, health: u32, inventory: Inventory) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            location,
            health,
            inventory,
        }
    }

    /// Put the player in `room`. No checks: callers decide whether the move is legal.
    pub fn move_to(&mut self, room: RoomId) {
        info!("{} moved from room #{} to room #{}", self.name, self.location.0, room.0);
        self.location = room;
    }

    /// Add an item to the player's inventory.
    ///
    /// # Errors
    /// - `InventoryFull` with the item handed back if the inventory is at capacity
    pub fn try_add_to_inventory(&mut self, item: Item) -> Result<(), InventoryFull> {
        self.inventory.take_item(item)
    }

    /// Whether the player carries an item with this name (ignoring case).
    pub fn has_named(&self, name: &str) -> bool {
        self.inventory.has_named(name)
    }
}
