//! module Render Progress
//!
//! Renderers for the world's response to an action: hidden items turning up,
//! keycards going into readers, and the escape itself.

use colored::Colorize as _;

use crate::{
    View, ViewItem,
    style::GameStyle as _,
    view::icons::{ICON_CELEBRATE, ICON_KEYCARD, ICON_REVEAL},
};

pub(super) fn revealed_items(view: &View) {
    for item in &view.items {
        if let ViewItem::ItemRevealed(name) = item {
            println!(
                "{:<4}{}",
                ICON_REVEAL.bright_yellow(),
                format!("You found a hidden {name}!").reveal_style()
            );
        }
    }
}

pub(super) fn keycard_progress(view: &View) {
    for item in &view.items {
        match item {
            ViewItem::PowerStillMissing => println!(
                "{:<4}{}",
                ICON_KEYCARD.progress_style(),
                "All keycards inserted, but power is missing.".progress_style()
            ),
            ViewItem::KeycardProgress { found, required } => println!(
                "{:<4}{}",
                ICON_KEYCARD.progress_style(),
                format!("Progress: {found}/{required} keycards.").progress_style()
            ),
            _ => {},
        }
    }
}

pub(super) fn escaped(view: &View) {
    if let Some(ViewItem::Escaped(lines)) = view.items.iter().find(|i| i.is_escaped()) {
        println!();
        for line in lines {
            println!("{:<4}{}", ICON_CELEBRATE, line.victory_style());
        }
    }
}
