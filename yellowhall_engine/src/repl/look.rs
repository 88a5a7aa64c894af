//! Observation and examination command handlers.
//!
//! - [`look_handler`] lists what can be seen in the current room
//! - [`examine_handler`] describes one item, offering to take it if possible
//! - [`inv_handler`] lists what the player carries
//!
//! Only `look` cares about light: hidden items stay out of its list until the
//! flashlight is on. Examining works by name whether or not an item is hidden.

use anyhow::Result;
use log::info;

use crate::repl::ReplControl;
use crate::{GameError, View, ViewItem, YellowhallWorld};

/// Show the player's current room on arrival: name, description, and exits.
/// Marks the room visited.
///
/// # Errors
/// - if the player's current room cannot be resolved
pub fn describe_room(world: &mut YellowhallWorld, view: &mut View) -> Result<()> {
    let room = world.player_room_ref()?;
    view.push(ViewItem::RoomDescription {
        name: room.name.clone(),
        description: room.description.clone(),
    });
    view.push(ViewItem::RoomExits(world.exit_lines(room)));
    world.player_room_mut()?.visited = true;
    Ok(())
}

/// Shows the room name and the items that can be seen in it.
///
/// # Errors
/// - if the player's current room cannot be resolved
pub fn look_handler(world: &mut YellowhallWorld, view: &mut View) -> Result<()> {
    let lit = world.progress.has_flashlight();
    let room = world.player_room_ref()?;
    let visible: Vec<String> = room.visible_items(lit).map(|item| item.name.clone()).collect();
    info!(
        "{} looked around {} ({} visible item(s), flashlight {})",
        world.player.name,
        room.name,
        visible.len(),
        if lit { "on" } else { "off" }
    );
    view.push(ViewItem::RoomDescription {
        name: room.name.clone(),
        description: room.description.clone(),
    });
    view.push(ViewItem::RoomItems(visible));
    Ok(())
}

/// Shows the description of an item in the room. If it can be taken, asks whether
/// to take it; the answer arrives as the next input line.
///
/// # Errors
/// - `GameError::ItemNotFound` if no item by that name is in the room
pub fn examine_handler(world: &mut YellowhallWorld, view: &mut View, thing: &str) -> Result<ReplControl> {
    let room = world.player_room_ref()?;
    let item = room
        .find_item_by_name(thing)
        .ok_or_else(|| GameError::ItemNotFound(thing.to_string()))?;
    info!("{} examined '{}' ({})", world.player.name, item.name, item.symbol);
    view.push(ViewItem::ItemDescription {
        name: item.name.clone(),
        description: item.description.clone(),
    });
    if item.takeable {
        Ok(ReplControl::ConfirmTake {
            item_id: item.id,
            item_name: item.name.clone(),
        })
    } else {
        Ok(ReplControl::Continue)
    }
}

/// Show the contents of player inventory.
pub fn inv_handler(world: &YellowhallWorld, view: &mut View) {
    view.push(ViewItem::Inventory(world.player.inventory.item_names()));
    info!("{} checked inventory", world.player.name);
}
