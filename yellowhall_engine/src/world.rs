//! Data structures representing the game world.
//!
//! This module defines [`YellowhallWorld`], the complete runtime state of one
//! game: every room (with the items lying in it), the player, and the escape
//! progress flags.

use anyhow::{Result, anyhow, bail};
use log::info;

use crate::goal::Progress;
use crate::loader::help::HelpCommand;
use crate::room::RoomId;
use crate::view::ExitLine;
use crate::{Player, Room};

/// Complete state of the running game.
///
/// Rooms are stored in a `Vec` and addressed by [`RoomId`], their index. The
/// player's location and every exit always point at an existing room; the
/// constructor refuses anything else.
#[derive(Debug, Clone)]
pub struct YellowhallWorld {
    pub title: String,
    pub intro: String,
    pub rooms: Vec<Room>,
    pub player: Player,
    pub progress: Progress,
    pub help: Vec<HelpCommand>,
    pub turn_count: usize,
}

impl YellowhallWorld {
    /// Assemble a world from already-built rooms and player.
    ///
    /// # Errors
    /// - if there are no rooms
    /// - if the player or any exit points at a room that doesn't exist
    pub fn new(title: &str, intro: &str, rooms: Vec<Room>, player: Player) -> Result<Self> {
        if rooms.is_empty() {
            bail!("a world needs at least one room");
        }
        if rooms.get(player.location.0).is_none() {
            bail!("player starts in room #{}, which does not exist", player.location.0);
        }
        for room in &rooms {
            for (direction, target) in &room.exits {
                if rooms.get(target.0).is_none() {
                    bail!(
                        "exit {direction} from '{}' leads to room #{}, which does not exist",
                        room.symbol,
                        target.0
                    );
                }
            }
        }
        info!("world '{title}' assembled with {} rooms", rooms.len());
        Ok(Self {
            title: title.to_string(),
            intro: intro.to_string(),
            rooms,
            player,
            progress: Progress::default(),
            help: Vec::new(),
            turn_count: 0,
        })
    }

    /// Obtain a reference to the room the player occupies.
    /// # Errors
    /// - if the player's room index is not found
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.room_ref(self.player.location)
    }

    /// Obtain a mutable reference to the room the player occupies.
    /// # Errors
    /// - if the player's room index is not found
    pub fn player_room_mut(&mut self) -> Result<&mut Room> {
        let location = self.player.location;
        self.rooms
            .get_mut(location.0)
            .ok_or_else(|| anyhow!("player's room #{} not found in world", location.0))
    }

    /// Look up a room by id.
    /// # Errors
    /// - if no room has this id
    pub fn room_ref(&self, id: RoomId) -> Result<&Room> {
        self.rooms
            .get(id.0)
            .ok_or_else(|| anyhow!("room #{} not found in world", id.0))
    }

    /// Exit list for a room: direction, destination name, and whether the player has
    /// been there, in direction order.
    pub fn exit_lines(&self, room: &Room) -> Vec<ExitLine> {
        room.exits
            .iter()
            .filter_map(|(direction, target)| {
                self.rooms.get(target.0).map(|dest| ExitLine {
                    direction: direction.to_string(),
                    destination: dest.name.clone(),
                    dest_visited: dest.visited,
                })
            })
            .collect()
    }
}
