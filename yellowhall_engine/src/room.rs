//! Room definitions and spatial utilities.
//!
//! Rooms are the nodes of a fixed, directed graph. Each room has up to four
//! exits keyed by compass [`Direction`]; an exit from A to B says nothing about
//! a way back from B to A. Rooms are built once when the world loads and are
//! referred to by [`RoomId`] afterwards, never copied.

use std::collections::BTreeMap;
use std::fmt;

use uuid::Uuid;

use crate::{Item, ItemHolder};

/// Index of a room in the world's room list. Index 0 is the starting room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// Compass directions an exit can point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    /// Parse a full direction name or its one-letter abbreviation (lowercase).
    pub fn from_token(token: &str) -> Option<Direction> {
        match token {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any visitable location in the game world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub visited: bool,
    pub exits: BTreeMap<Direction, RoomId>,
    pub contents: Vec<Item>,
}

impl ItemHolder for Room {
    fn items(&self) -> &[Item] {
        &self.contents
    }

    fn remove_item(&mut self, item_id: Uuid) -> Option<Item> {
        let index = self.contents.iter().position(|item| item.id == item_id)?;
        Some(self.contents.remove(index))
    }
}

impl Room {
    /// Create an empty room with no exits.
    pub fn new(id: RoomId, symbol: &str, name: &str, description: &str) -> Self {
        Self {
            id,
            symbol: symbol.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            visited: false,
            exits: BTreeMap::new(),
            contents: Vec::new(),
        }
    }

    /// The room reached by going `direction` from here, if any.
    pub fn neighbor(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    /// Add a one-way exit. Only used while the world is being built.
    pub fn connect(&mut self, direction: Direction, to: RoomId) {
        self.exits.insert(direction, to);
    }

    /// Put an item at the end of this room's item list.
    pub fn add_item(&mut self, item: Item) {
        self.contents.push(item);
    }

    /// Remove an item along with the slot it occupied, so it can be put back
    /// in the same place with [`Room::put_back`].
    pub fn take_out(&mut self, item_id: Uuid) -> Option<(usize, Item)> {
        let slot = self.contents.iter().position(|item| item.id == item_id)?;
        Some((slot, self.contents.remove(slot)))
    }

    /// Return an item to the slot it was taken from.
    pub fn put_back(&mut self, slot: usize, item: Item) {
        let slot = slot.min(self.contents.len());
        self.contents.insert(slot, item);
    }

    /// Case-insensitive lookup of an item lying in this room, hidden or not.
    pub fn find_item_by_name(&self, name: &str) -> Option<&Item> {
        self.find_by_name(name)
    }

    /// Items a `look` would list, given whether there is light to see by.
    pub fn visible_items(&self, lit: bool) -> impl Iterator<Item = &Item> {
        self.contents.iter().filter(move |item| item.is_visible(lit))
    }

    /// Un-hide every hidden item here, returning the names of the ones that changed.
    pub fn reveal_hidden(&mut self) -> Vec<String> {
        self.contents
            .iter_mut()
            .filter_map(|item| item.reveal().then(|| item.name.clone()))
            .collect()
    }
}
