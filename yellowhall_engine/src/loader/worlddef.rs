//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into runtime engine structs.
//! String ids from the data file are resolved here: rooms become dense
//! [`RoomId`] indices in file order, items get stable UUIDs from their ids.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::info;
use yellowhall_data::{ItemDef, PlayerDef, RoomDef, WorldDef};

use crate::room::{Direction, RoomId};
use crate::{Inventory, Item, Player, Room, YellowhallWorld};

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - if the file can't be read or isn't a valid `WorldDef`
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))
}

/// Convert a `WorldDef` into a populated `YellowhallWorld`, player in the first room.
///
/// # Errors
/// - if an exit or item refers to a room id that isn't defined, or a direction is unknown
pub fn build_world_from_def(def: &WorldDef) -> Result<YellowhallWorld> {
    let room_ids: HashMap<&str, RoomId> = def
        .rooms
        .iter()
        .enumerate()
        .map(|(index, room)| (room.id.as_str(), RoomId(index)))
        .collect();

    let mut rooms = def
        .rooms
        .iter()
        .enumerate()
        .map(|(index, room_def)| room_from_def(room_def, RoomId(index), &room_ids))
        .collect::<Result<Vec<_>>>()?;

    for item_def in &def.items {
        let room_id = resolve_room(&room_ids, &item_def.room).with_context(|| format!("placing item '{}'", item_def.id))?;
        let room = rooms
            .get_mut(room_id.0)
            .ok_or_else(|| anyhow!("room #{} missing while placing '{}'", room_id.0, item_def.id))?;
        room.add_item(item_from_def(item_def));
    }

    let player = player_from_def(&def.game.player);
    info!(
        "player '{}' built with capacity {}",
        player.name,
        player.inventory.capacity()
    );
    YellowhallWorld::new(&def.game.title, &def.game.intro, rooms, player)
}

fn resolve_room(room_ids: &HashMap<&str, RoomId>, id: &str) -> Result<RoomId> {
    room_ids
        .get(id)
        .copied()
        .ok_or_else(|| anyhow!("unknown room id '{id}'"))
}

fn room_from_def(def: &RoomDef, id: RoomId, room_ids: &HashMap<&str, RoomId>) -> Result<Room> {
    let mut room = Room::new(id, &def.id, &def.name, &def.desc);
    for exit in &def.exits {
        let direction = Direction::from_token(&exit.direction.to_lowercase())
            .ok_or_else(|| anyhow!("room '{}' has unknown exit direction '{}'", def.id, exit.direction))?;
        let target = resolve_room(room_ids, &exit.to).with_context(|| format!("exit {direction} of room '{}'", def.id))?;
        room.connect(direction, target);
    }
    Ok(room)
}

fn item_from_def(def: &ItemDef) -> Item {
    Item::new(&def.id, &def.name, &def.desc, def.takeable, def.hidden)
}

fn player_from_def(def: &PlayerDef) -> Player {
    let mut player = Player::new(
        &def.name,
        RoomId(0),
        def.health,
        Inventory::new(def.inventory_capacity),
    );
    player.description.clone_from(&def.description);
    player
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemHolder;
    use yellowhall_data::{ExitDef, GameDef};

    fn room_def(id: &str, exits: &[(&str, &str)]) -> RoomDef {
        RoomDef {
            id: id.to_string(),
            name: id.to_uppercase(),
            desc: format!("The {id}."),
            exits: exits
                .iter()
                .map(|(direction, to)| ExitDef {
                    direction: (*direction).to_string(),
                    to: (*to).to_string(),
                })
                .collect(),
        }
    }

    fn item_def(id: &str, room: &str, hidden: bool) -> ItemDef {
        ItemDef {
            id: id.to_string(),
            name: id.to_string(),
            desc: String::new(),
            room: room.to_string(),
            takeable: true,
            hidden,
        }
    }

    fn sample_def() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Sample".into(),
                ..GameDef::default()
            },
            rooms: vec![room_def("hall", &[("north", "den")]), room_def("den", &[])],
            items: vec![item_def("lamp", "den", false), item_def("coin", "den", true)],
        }
    }

    #[test]
    fn rooms_get_indices_in_file_order() {
        let world = build_world_from_def(&sample_def()).unwrap();
        assert_eq!(world.rooms[0].symbol, "hall");
        assert_eq!(world.rooms[0].neighbor(Direction::North), Some(RoomId(1)));
        // exits are one-way unless both sides list them
        assert!(world.rooms[1].exits.is_empty());
        assert_eq!(world.player.location, RoomId(0));
    }

    #[test]
    fn items_keep_file_order_and_flags() {
        let world = build_world_from_def(&sample_def()).unwrap();
        let names: Vec<_> = world.rooms[1].items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["lamp", "coin"]);
        assert!(world.rooms[1].contents[1].hidden);
        assert_eq!(world.rooms[1].contents[0].id, Item::new("lamp", "x", "", true, false).id);
    }

    #[test]
    fn exit_directions_ignore_case() {
        let mut def = sample_def();
        def.rooms[1].exits.push(ExitDef {
            direction: "South".into(),
            to: "hall".into(),
        });
        assert!(yellowhall_data::validate_world(&def).is_empty());
        let world = build_world_from_def(&def).unwrap();
        assert_eq!(world.rooms[1].neighbor(Direction::South), Some(RoomId(0)));
    }

    #[test]
    fn unknown_references_fail_the_build() {
        let mut def = sample_def();
        def.items.push(item_def("ghost", "attic", false));
        assert!(build_world_from_def(&def).is_err());

        let mut def = sample_def();
        def.rooms[1].exits.push(ExitDef {
            direction: "down".into(),
            to: "hall".into(),
        });
        assert!(build_world_from_def(&def).is_err());
    }
}
