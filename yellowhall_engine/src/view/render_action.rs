//! module Render Action
//!
//! This module contains the individual `ViewItem` renderers direct responses to action
//! commands -- successes, failures, and errors.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, normal_block},
    view::icons::{ICON_ERROR, ICON_FAILURE, ICON_QUESTION, ICON_SUCCESS},
};

pub(super) fn action_success(view: &View) {
    let messages = view.items.iter().filter_map(|i| match i {
        ViewItem::ActionSuccess(msg) => Some(msg),
        _ => None,
    });
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{} {}", ICON_SUCCESS.bright_green(), msg).as_str(),
                normal_block()
            )
        );
    }
}

pub(super) fn action_failure(view: &View) {
    let messages = view.items.iter().filter_map(|i| match i {
        ViewItem::ActionFailure(msg) => Some(msg),
        _ => None,
    });
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{} {}", ICON_FAILURE.bright_red(), msg.denied_style()).as_str(),
                normal_block()
            )
        );
    }
}

pub(super) fn errors(view: &View) {
    let messages = view.items.iter().filter_map(|i| match i {
        ViewItem::Error(msg) => Some(msg),
        _ => None,
    });
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{:<4}{}", ICON_ERROR.error_icon_style(), msg.error_style()).as_str(),
                normal_block()
            )
        );
    }
}

pub(super) fn questions(view: &View) {
    let messages = view.items.iter().filter_map(|i| match i {
        ViewItem::Question(msg) => Some(msg),
        _ => None,
    });
    for msg in messages {
        println!("{:<4}{}", ICON_QUESTION.bright_yellow(), msg.highlight());
    }
}
