//! module Render System
//!
//! This module contains the `ViewItem` renderers for system/engine messages,
//! such as help, status, and the summary upon quitting.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, normal_block},
    view::icons::{ICON_ENGINE, ICON_STATUS},
};

/// Used for generic messages from the engine.
pub(super) fn engine_message(view: &View) {
    let engine_msgs = view.items.iter().filter_map(|i| match i {
        ViewItem::EngineMessage(msg) => Some(msg),
        _ => None,
    });
    for msg in engine_msgs {
        println!("{}", fill(format!("{ICON_ENGINE:<4}{msg}").as_str(), normal_block()));
    }
}

/// Displays the list of commands loaded from the help file.
pub(super) fn show_help(view: &View) {
    if let Some(ViewItem::Help(commands)) = view.items.iter().find(|i| i.is_help()) {
        println!("{}", "Commands:".subheading_style());
        let width = commands.iter().map(|c| c.command.len()).max().unwrap_or_default();
        for cmd in commands {
            println!("    {:<width$}  {}", cmd.command.highlight(), cmd.description.italic());
        }
        println!();
    }
}

pub(super) fn status(view: &View) {
    if let Some(ViewItem::Status {
        location,
        health,
        keycards,
        required,
        power_fixed,
        flashlight_on,
        carried,
        capacity,
    }) = view.items.iter().find(|i| i.is_status())
    {
        let on_off = |flag: &bool| if *flag { "yes".bright_green() } else { "no".bright_red() };
        println!("{:<4}{}", ICON_STATUS.yellow(), "Status".subheading_style());
        println!("    Location:   {}", location.room_style());
        println!("    Health:     {health}");
        println!("    Keycards:   {keycards}/{required}");
        println!("    Power:      {}", on_off(power_fixed));
        println!("    Flashlight: {}", on_off(flashlight_on));
        println!("    Carrying:   {carried}/{capacity}");
        println!();
    }
}

pub(super) fn quit_summary(view: &View) {
    if let Some(ViewItem::QuitSummary {
        turns,
        keycards,
        required,
    }) = view.items.iter().find(|i| i.is_quit_summary())
    {
        println!(
            "{}",
            format!("You gave up after {turns} turns with {keycards}/{required} keycards inserted.").dimmed()
        );
        println!("Turning off...");
    }
}
