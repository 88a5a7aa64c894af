//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that move items between the
//! current room and the player's inventory.

use anyhow::{Result, anyhow};
use log::info;
use uuid::Uuid;

use crate::inventory::InventoryFull;
use crate::{GameError, ItemHolder, View, ViewItem, YellowhallWorld};

/// Takes a named item from the current room.
///
/// Items that can't be picked up are refused with a message, not an error.
///
/// # Errors
/// - `GameError::ItemNotFound` if the room holds no item by that name
/// - `GameError::ContainerFull` if the inventory is at capacity
pub fn take_handler(world: &mut YellowhallWorld, view: &mut View, thing: &str) -> Result<()> {
    let room = world.player_room_ref()?;
    let item = room
        .find_item_by_name(thing)
        .ok_or_else(|| GameError::ItemNotFound(thing.to_string()))?;
    if !item.takeable {
        info!("{} tried to take fixed item '{}'", world.player.name, item.symbol);
        view.push(ViewItem::ActionFailure(format!("You can't take the {}.", item.name)));
        return Ok(());
    }
    let item_id = item.id;
    transfer_to_player(world, view, item_id)
}

/// Settles the question asked by `examine`. A "no" leaves the item where it is.
///
/// # Errors
/// - `GameError::ItemNotFound` if the item is no longer in the room
/// - `GameError::ContainerFull` if the inventory is at capacity
pub fn take_answer_handler(
    world: &mut YellowhallWorld,
    view: &mut View,
    item_id: Uuid,
    item_name: &str,
    accepted: bool,
) -> Result<()> {
    if !accepted {
        info!("{} declined to take '{item_name}'", world.player.name);
        view.push(ViewItem::ActionFailure(format!("You leave the {item_name} where it is.")));
        return Ok(());
    }
    if !world.player_room_ref()?.contains_item(item_id) {
        return Err(GameError::ItemNotFound(item_name.to_string()).into());
    }
    transfer_to_player(world, view, item_id)
}

/// Move an item from the current room into the player's inventory.
///
/// A refused item goes back to its old slot, so a full inventory leaves the
/// room as it was.
///
/// # Errors
/// - `GameError::ContainerFull` if the inventory is at capacity
/// - if the item isn't in the player's room
pub fn transfer_to_player(world: &mut YellowhallWorld, view: &mut View, item_id: Uuid) -> Result<()> {
    let room = world.player_room_mut()?;
    let room_name = room.name.clone();
    let (slot, item) = room
        .take_out(item_id)
        .ok_or_else(|| anyhow!("item {item_id} not found in {room_name}"))?;
    let item_name = item.name.clone();
    if let Err(InventoryFull(item)) = world.player.try_add_to_inventory(item) {
        info!("{} can't carry '{item_name}', it stays in {room_name}", world.player.name);
        world.player_room_mut()?.put_back(slot, item);
        return Err(GameError::ContainerFull.into());
    }
    info!("{} took '{item_name}' from {room_name}", world.player.name);
    view.push(ViewItem::ActionSuccess(format!("You take the {item_name}.")));
    Ok(())
}

/// Drops a named item from inventory into the current room.
///
/// # Errors
/// - if the player's current room cannot be resolved
pub fn drop_handler(world: &mut YellowhallWorld, view: &mut View, thing: &str) -> Result<()> {
    let Some(item_id) = world.player.inventory.find_by_name(thing).map(|item| item.id) else {
        view.push(ViewItem::ActionFailure(format!("You don't have a {thing}.")));
        return Ok(());
    };
    let item = world
        .player
        .inventory
        .remove_item(item_id)
        .ok_or_else(|| anyhow!("item {item_id} vanished from inventory"))?;
    let item_name = item.name.clone();
    let room = world.player_room_mut()?;
    let room_name = room.name.clone();
    room.add_item(item);
    info!("{} dropped '{item_name}' in {room_name}", world.player.name);
    view.push(ViewItem::ActionSuccess(format!("You drop the {item_name}.")));
    Ok(())
}
