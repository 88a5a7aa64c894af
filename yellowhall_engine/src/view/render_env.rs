//! # Render Env(ironment) Module
//!
//! This module contains the individual `ViewItem` renderers for the "environment" section
//! of an output frame.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, normal_block},
};

/// Used by `flush()` to show base room description
pub(super) fn room_description(view: &View) {
    if let Some(ViewItem::RoomDescription { name, description }) =
        view.items.iter().find(|i| i.is_room_description())
    {
        println!("{:^width$}", name.room_titlebar_style(), width = view.width);
        println!("{}", fill(description, normal_block()).description_style());
        println!();
    }
}

pub(super) fn room_item_list(view: &View) {
    if let Some(ViewItem::RoomItems(names)) = view.items.iter().find(|i| i.is_room_items()) {
        if names.is_empty() {
            println!("{}", "Nothing of interest in the dim light.".italic().dimmed());
        } else {
            println!("{}", "You see:".subheading_style());
            for name in names {
                println!("    > {}", name.item_style());
            }
        }
        println!();
    }
}

pub(super) fn room_exit_list(view: &View) {
    if let Some(ViewItem::RoomExits(exit_lines)) = view.items.iter().find(|i| i.is_room_exits()) {
        println!("{}:", "Exits".subheading_style());
        for exit in exit_lines {
            let direction = if exit.dest_visited {
                exit.direction.exit_visited_style()
            } else {
                exit.direction.exit_unvisited_style()
            };
            println!("    > {} (to {})", direction, exit.destination.room_style());
        }
        println!();
    }
}
