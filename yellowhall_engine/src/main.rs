#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Yellowhall **
//! Find three keycards, get the power back on, and get out.

use yellowhall_engine::style::GameStyle;
use yellowhall_engine::{Session, YELLOWHALL_VERSION, load_world, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;
use textwrap::{fill, termwidth};

use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Yellowhall world (v{YELLOWHALL_VERSION})...");
    let world = load_world().context("while loading YellowhallWorld")?;
    info!("YellowhallWorld loaded successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("while clearing the screen")?;
    info!("Starting the game!");

    println!(
        "{:^width$}",
        world.title.as_str().bright_yellow().underline(),
        width = termwidth()
    );
    println!(
        "\nYou are {}, {}\n",
        world.player.name.as_str().bold().bright_blue(),
        world.player.description
    );
    println!("{}\n", fill(&world.intro, termwidth()).description_style());
    println!("{}", "Type 'help' for a list of commands.".italic().dimmed());

    let mut session = Session::new(world);
    run_repl(&mut session)?;
    info!("session finished: {:?}", session.state());
    Ok(())
}
