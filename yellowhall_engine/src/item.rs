//! Item types and related helpers.
//!
//! Items are plain data: a name, a description, and two flags. What an item
//! *does* when used is decided elsewhere (see [`crate::usable`]) from its name.
//! Items are never destroyed, only moved between rooms and the player's inventory.

use uuid::Uuid;

use crate::idgen::{NAMESPACE_ITEM, uuid_from_token};

/// Anything in the world that can be looked at, and possibly picked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Stable id derived from `symbol`.
    pub id: Uuid,
    /// The token used to refer to this item in world data.
    pub symbol: String,
    /// Display name; also what the player types to refer to it.
    pub name: String,
    pub description: String,
    /// Whether the item can be moved into the player's inventory.
    pub takeable: bool,
    /// Hidden items are left out of `look` listings until revealed.
    pub hidden: bool,
}

impl Item {
    /// Create an item, deriving its id from the world-data symbol.
    pub fn new(symbol: &str, name: &str, description: &str, takeable: bool, hidden: bool) -> Self {
        Self {
            id: uuid_from_token(&NAMESPACE_ITEM, symbol),
            symbol: symbol.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            takeable,
            hidden,
        }
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Whether a `look` should list this item. Any hidden item shows up once there is light.
    pub fn is_visible(&self, lit: bool) -> bool {
        !self.hidden || lit
    }

    /// Clear the hidden flag. Returns true only if the item was hidden before.
    pub fn reveal(&mut self) -> bool {
        std::mem::replace(&mut self.hidden, false)
    }
}

/// Anything that holds an ordered collection of items (rooms, the player's inventory).
pub trait ItemHolder {
    /// The held items, in the order they were added.
    fn items(&self) -> &[Item];

    /// Remove the item with this id. Returns `None` (and changes nothing) if it isn't held here.
    fn remove_item(&mut self, item_id: Uuid) -> Option<Item>;

    /// First held item whose name matches, ignoring case.
    fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items().iter().find(|item| item.is_named(name))
    }

    fn has_named(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    fn contains_item(&self, item_id: Uuid) -> bool {
        self.items().iter().any(|item| item.id == item_id)
    }
}
