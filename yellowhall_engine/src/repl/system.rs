//! `repl::system` module
//!
//! Contains repl loop handlers for commands about the game rather than the world:
//! help, status, and quitting.

use anyhow::Result;
use log::info;

use crate::goal::REQUIRED_KEYCARDS;
use crate::repl::{Ending, ReplControl};
use crate::{View, ViewItem, YellowhallWorld};

/// Quit the game.
pub fn quit_handler(world: &YellowhallWorld, view: &mut View) -> ReplControl {
    info!(
        "{} quit after {} turns with {}/{REQUIRED_KEYCARDS} keycards",
        world.player.name,
        world.turn_count,
        world.progress.keycards_found()
    );
    info!("ending inventory:");
    world
        .player
        .inventory
        .item_names()
        .iter()
        .for_each(|name| info!("- {name}"));

    view.push(ViewItem::QuitSummary {
        turns: world.turn_count,
        keycards: world.progress.keycards_found(),
        required: REQUIRED_KEYCARDS,
    });
    ReplControl::End(Ending::Quit)
}

/// Show the command list loaded from the help file.
pub fn help_handler(world: &YellowhallWorld, view: &mut View) {
    view.push(ViewItem::Help(world.help.clone()));
    info!("{} requested help", world.player.name);
}

/// Report escape progress and the player's condition.
///
/// # Errors
/// - if the player's current room cannot be resolved
pub fn status_handler(world: &YellowhallWorld, view: &mut View) -> Result<()> {
    let room = world.player_room_ref()?;
    view.push(ViewItem::Status {
        location: room.name.clone(),
        health: world.player.health,
        keycards: world.progress.keycards_found(),
        required: REQUIRED_KEYCARDS,
        power_fixed: world.progress.power_fixed(),
        flashlight_on: world.progress.has_flashlight(),
        carried: world.player.inventory.len(),
        capacity: world.player.inventory.capacity(),
    });
    Ok(())
}
