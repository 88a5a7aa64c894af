//! `repl::item` module
//!
//! The `use` command: hands an inventory item to the usability rules and
//! reports what happened, including the escape check after each keycard.

use anyhow::{Result, anyhow};
use log::info;

use crate::goal::{Progress, WinStatus};
use crate::repl::{Ending, ReplControl};
use crate::usable::{UseEffect, use_item};
use crate::{ItemHolder, View, ViewItem, YellowhallWorld};

/// Closing lines shown when the exit door opens.
const VICTORY_LINES: [&str; 3] = [
    "All keycards inserted and power restored!",
    "The exit door opens...",
    "=== CONGRATULATIONS! YOU ESCAPED! ===",
];

/// Use an item from the player's inventory in the current room.
///
/// Not carrying the item is reported as a plain message. Items are never used up.
///
/// # Errors
/// - `GameError::NotUsable` if the item has no use here
/// - if the player's current room cannot be resolved
pub fn use_handler(world: &mut YellowhallWorld, view: &mut View, thing: &str) -> Result<ReplControl> {
    let Some(item_name) = world.player.inventory.find_by_name(thing).map(|item| item.name.clone()) else {
        view.push(ViewItem::ActionFailure(format!("You don't have a {thing}.")));
        return Ok(ReplControl::Continue);
    };

    let YellowhallWorld {
        rooms,
        player,
        progress,
        ..
    } = world;
    let room = rooms
        .get_mut(player.location.0)
        .ok_or_else(|| anyhow!("player's room #{} not found in world", player.location.0))?;
    let effect = use_item(&item_name, room, progress)?;
    info!("{} used '{item_name}': {effect:?}", player.name);
    Ok(report_effect(view, &item_name, effect, progress))
}

fn report_effect(view: &mut View, item_name: &str, effect: UseEffect, progress: &Progress) -> ReplControl {
    match effect {
        UseEffect::FlashlightOn { revealed } => {
            view.push(ViewItem::ActionSuccess(
                "You turn on the flashlight. Its beam cuts through the dim areas.".to_string(),
            ));
            for name in revealed {
                view.push(ViewItem::ItemRevealed(name));
            }
        },
        UseEffect::FlashlightAlreadyOn => {
            view.push(ViewItem::ActionSuccess("The flashlight is already on.".to_string()));
        },
        UseEffect::PowerRestored => {
            view.push(ViewItem::ActionSuccess(
                "You install the battery. Power restored!".to_string(),
            ));
        },
        UseEffect::KeycardInserted { .. } => {
            view.push(ViewItem::ActionSuccess(format!(
                "You insert the {item_name} into the card reader."
            )));
            return check_escape(view, progress);
        },
        UseEffect::WaterDrunk { protected } => {
            view.push(ViewItem::ActionSuccess("You drink some water. Refreshing!".to_string()));
            if protected {
                view.push(ViewItem::ActionSuccess(
                    "You feel protected from the toxic environment.".to_string(),
                ));
            }
        },
    }
    ReplControl::Continue
}

/// Run the win check and report where the player stands.
pub fn check_escape(view: &mut View, progress: &Progress) -> ReplControl {
    match progress.evaluate() {
        WinStatus::Escaped => {
            info!("all keycards in and power restored: player escaped");
            view.push(ViewItem::Escaped(VICTORY_LINES.iter().map(ToString::to_string).collect()));
            ReplControl::End(Ending::Escaped)
        },
        WinStatus::PowerMissing => {
            view.push(ViewItem::PowerStillMissing);
            ReplControl::Continue
        },
        WinStatus::InProgress { found, required } => {
            view.push(ViewItem::KeycardProgress { found, required });
            ReplControl::Continue
        },
    }
}
