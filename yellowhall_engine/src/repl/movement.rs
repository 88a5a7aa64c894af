//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use anyhow::Result;
use log::info;

use crate::repl::look::describe_room;
use crate::room::Direction;
use crate::{GameError, View, YellowhallWorld};

/// Move the player to a neighboring room, if there is an exit that way.
///
/// # Errors
/// - `GameError::InvalidDirection` if the word isn't a direction or the room has no exit there
pub fn move_to_handler(world: &mut YellowhallWorld, view: &mut View, input_dir: &str) -> Result<()> {
    let direction =
        Direction::from_token(input_dir).ok_or_else(|| GameError::InvalidDirection(input_dir.to_string()))?;
    let current_room = world.player_room_ref()?;
    let Some(destination) = current_room.neighbor(direction) else {
        info!(
            "{} bumped into a wall going {direction} from {}",
            world.player.name, current_room.name
        );
        return Err(GameError::InvalidDirection(direction.to_string()).into());
    };

    world.player.move_to(destination);
    describe_room(world, view)
}
