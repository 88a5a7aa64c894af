//! Recoverable game-rule errors.
//!
//! Every variant is reported to the player as a message and the session keeps
//! running. The `Display` text of each variant is exactly what the player sees.

use thiserror::Error;

/// Things that can go wrong while carrying out a single player command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The current room has no exit in the requested direction.
    #[error("Cannot move {0} - there's a wall in that direction")]
    InvalidDirection(String),

    /// No item with this name is in the current room.
    #[error("There is no '{0}' here")]
    ItemNotFound(String),

    /// The inventory is already at capacity.
    #[error("Your inventory is full! Drop something first")]
    ContainerFull,

    /// The item has no use rule, or its rule does not apply here and now.
    #[error("You can't use the '{0}' here")]
    NotUsable(String),
}
