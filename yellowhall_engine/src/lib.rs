#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const YELLOWHALL_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod error;
pub mod goal;
pub mod idgen;
pub mod inventory;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod style;
pub mod usable;
pub mod view;
pub mod world;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use error::GameError;
pub use inventory::Inventory;
pub use item::{Item, ItemHolder};
pub use loader::{load_world, load_world_from};
pub use player::Player;
pub use repl::{Ending, Session, SessionState, run_repl};
pub use room::Room;
pub use view::{View, ViewItem};
pub use world::YellowhallWorld;
