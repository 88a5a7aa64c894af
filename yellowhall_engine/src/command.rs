//! Command module
//!
//! Turns one line of player input into a [`Command`]. Input is lowercased,
//! trimmed, and split on whitespace; the first word picks the command and the
//! second (if any) is its target. Anything after the second word is ignored.

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Drop(String),
    Examine(String),
    Go(String),
    Help,
    Inventory,
    Look,
    /// A command word without the target it needs; holds the question to ask back.
    MissingTarget(&'static str),
    Quit,
    Status,
    Take(String),
    Unknown,
    Use(String),
}

/// Parses an input string and returns the corresponding `Command`.
pub fn parse_command(input: &str) -> Command {
    let lowered = input.trim().to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    match words.as_slice() {
        ["quit" | "exit", ..] => Command::Quit,
        ["go"] => Command::MissingTarget("Give the direction"),
        ["go", dir, ..] => Command::Go((*dir).to_string()),
        [dir @ ("north" | "n" | "south" | "s" | "east" | "e" | "west" | "w"), ..] => {
            Command::Go((*dir).to_string())
        },
        ["look", ..] => Command::Look,
        ["examine" | "inspect"] | ["take"] => Command::MissingTarget("Which object?"),
        ["examine" | "inspect", thing, ..] => Command::Examine((*thing).to_string()),
        ["inventory" | "inv" | "i", ..] => Command::Inventory,
        ["take", thing, ..] => Command::Take((*thing).to_string()),
        ["drop"] | ["use"] => Command::MissingTarget("Which item?"),
        ["drop", thing, ..] => Command::Drop((*thing).to_string()),
        ["use", thing, ..] => Command::Use((*thing).to_string()),
        ["status" | "progress", ..] => Command::Status,
        ["help" | "?", ..] => Command::Help,
        _ => Command::Unknown,
    }
}

/// Interprets the answer to a yes/no question. Only "y" and "yes" count as yes.
pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
