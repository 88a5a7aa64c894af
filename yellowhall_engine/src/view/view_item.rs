//! ViewItem module
//!
//! A `ViewItem` is an enum variant sent to the `View`, which aggregates them, styles them,
//! organizes them, and displays them before moving to the next turn. Variants contain different
//! payloads, depending the type of information that needs to be displayed.

use variantly::Variantly;

use crate::loader::help::HelpCommand;
use crate::view::{ExitLine, Section};

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    EngineMessage(String),
    Error(String),
    /// The game is won; carries the closing lines.
    Escaped(Vec<String>),
    Help(Vec<HelpCommand>),
    Inventory(Vec<String>),
    ItemDescription {
        name: String,
        description: String,
    },
    ItemRevealed(String),
    KeycardProgress {
        found: u8,
        required: u8,
    },
    PowerStillMissing,
    /// A follow-up question, asked when a command is missing its target.
    Question(String),
    QuitSummary {
        turns: usize,
        keycards: u8,
        required: u8,
    },
    RoomDescription {
        name: String,
        description: String,
    },
    RoomExits(Vec<ExitLine>),
    RoomItems(Vec<String>),
    Status {
        location: String,
        health: u32,
        keycards: u8,
        required: u8,
        power_fixed: bool,
        flashlight_on: bool,
        carried: usize,
        capacity: usize,
    },
}

impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::RoomDescription { .. } | ViewItem::RoomItems(_) | ViewItem::RoomExits(_) => {
                Section::Environment
            },
            ViewItem::ActionSuccess(_)
            | ViewItem::ActionFailure(_)
            | ViewItem::Error(_)
            | ViewItem::Question(_)
            | ViewItem::ItemDescription { .. }
            | ViewItem::Inventory(_) => Section::DirectResult,
            ViewItem::ItemRevealed(_)
            | ViewItem::KeycardProgress { .. }
            | ViewItem::PowerStillMissing
            | ViewItem::Escaped(_) => Section::WorldResponse,
            ViewItem::Status { .. } | ViewItem::Help(_) | ViewItem::EngineMessage(_) | ViewItem::QuitSummary { .. } => {
                Section::System
            },
        }
    }
}
