//! Loader utilities for building a `YellowhallWorld` from serialized data.
//!
//! World content is loaded from a `WorldDef` (RON) and checked with
//! `yellowhall_data::validate_world` before anything is built. Help text is
//! TOML-backed.

pub mod help;
pub mod worlddef;

use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use yellowhall_data::WorldDef;

use crate::YellowhallWorld;
use crate::data_paths::data_path;
use crate::loader::help::load_help_commands;
use crate::loader::worlddef::{build_world_from_def, load_worlddef};

/// Load the world and help text from the data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or failed validation.
pub fn load_world() -> Result<YellowhallWorld> {
    load_world_from(&data_path("world.ron"), &data_path("help_commands.toml"))
}

/// Load the world and help text from explicit file paths.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or failed validation.
pub fn load_world_from(world_path: &Path, help_path: &Path) -> Result<YellowhallWorld> {
    let worlddef = load_worlddef(world_path).context("while loading worlddef from file")?;
    validate_worlddef(&worlddef)?;
    let mut world = build_world_from_def(&worlddef).context("while building world from worlddef")?;
    info!("{} rooms added to YellowhallWorld", world.rooms.len());
    info!(
        "{} items placed in YellowhallWorld",
        world.rooms.iter().map(|room| room.contents.len()).sum::<usize>()
    );

    world.help = load_help_commands(help_path).context("while loading help commands")?;
    info!(
        "player \"{}\" added to YellowhallWorld at '{}'",
        world.player.name,
        world.player_room_ref()?.symbol
    );
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = yellowhall_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}
