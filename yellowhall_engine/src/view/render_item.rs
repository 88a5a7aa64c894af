//! module Render Item
//!
//! This module contains the individual `ViewItem` renderers for `Item`-related feedback.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, indented_block},
};

/// Renders the name and description of an examined item.
pub(super) fn item_detail(view: &View) {
    if let Some(ViewItem::ItemDescription { name, description }) =
        view.items.iter().find(|i| i.is_item_description())
    {
        println!("{}", name.item_style().underline());
        println!("{}", fill(description, indented_block()).description_style());
        println!();
    }
}

pub(super) fn inventory(view: &View) {
    if let Some(ViewItem::Inventory(names)) = view.items.iter().find(|i| i.is_inventory()) {
        if names.is_empty() {
            println!("{}", "Your inventory is empty.".italic().dimmed());
        } else {
            println!("{}", "Inventory:".subheading_style());
            for name in names {
                println!("    - {}", name.item_style());
            }
        }
        println!();
    }
}
