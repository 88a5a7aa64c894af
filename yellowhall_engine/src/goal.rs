//! module: goal
//!
//! Progress toward escaping, and the check that decides whether the player has won.

/// Number of keycard insertions needed to open the exit.
pub const REQUIRED_KEYCARDS: u8 = 3;

/// Session-wide progress flags. Every flag only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    power_fixed: bool,
    has_flashlight: bool,
    keycards_found: u8,
}

/// Where the player stands relative to the win condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinStatus {
    /// All keycards are in and power is back: the door opens.
    Escaped,
    /// All keycards are in but the power is still out.
    PowerMissing,
    /// Not enough keycards yet.
    InProgress { found: u8, required: u8 },
}

impl Progress {
    pub fn power_fixed(&self) -> bool {
        self.power_fixed
    }

    pub fn has_flashlight(&self) -> bool {
        self.has_flashlight
    }

    pub fn keycards_found(&self) -> u8 {
        self.keycards_found
    }

    /// Restore power. Returns false if it was already restored.
    pub fn restore_power(&mut self) -> bool {
        !std::mem::replace(&mut self.power_fixed, true)
    }

    /// Switch the flashlight on. Returns false if it was already on.
    pub fn switch_on_flashlight(&mut self) -> bool {
        !std::mem::replace(&mut self.has_flashlight, true)
    }

    /// Count one keycard insertion and return the new total.
    ///
    /// The count stops at [`REQUIRED_KEYCARDS`]; the reader has no more slots than that.
    pub fn insert_keycard(&mut self) -> u8 {
        self.keycards_found = (self.keycards_found + 1).min(REQUIRED_KEYCARDS);
        self.keycards_found
    }

    /// Evaluate the win condition: enough keycards *and* power restored.
    pub fn evaluate(&self) -> WinStatus {
        if self.keycards_found >= REQUIRED_KEYCARDS && self.power_fixed {
            WinStatus::Escaped
        } else if self.keycards_found >= REQUIRED_KEYCARDS {
            WinStatus::PowerMissing
        } else {
            WinStatus::InProgress {
                found: self.keycards_found,
                required: REQUIRED_KEYCARDS,
            }
        }
    }
}
