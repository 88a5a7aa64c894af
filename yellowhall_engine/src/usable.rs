//! Item usability rules.
//!
//! Items carry no behavior of their own. When the player uses an item, its
//! name is classified into a [`UsableKind`] by substring match (so any item
//! whose name contains "keycard" is a keycard), and the matching rule is
//! applied against the current room and the session's [`Progress`].
//!
//! Rules are checked in a fixed order: flashlight, battery, keycard, water.
//! A name matching none of them is not usable. Using an item never removes it
//! from the inventory.

use log::info;

use crate::{GameError, Room, goal::Progress};

/// The only room where the battery restores power.
pub const ELECTRICAL_ROOM: &str = "Electrical Room";
/// Rooms with a card reader that accepts keycards.
pub const CARD_READER_ROOMS: [&str; 2] = ["Empty Office", "Exit"];
/// Drinking water here earns an extra message.
pub const WET_CARPET_AREA: &str = "Wet Carpet Area";

/// Classification of a usable item, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsableKind {
    Flashlight,
    Battery,
    Keycard,
    Water,
}

/// Name fragments in priority order.
const RULES: [(&str, UsableKind); 4] = [
    ("flashlight", UsableKind::Flashlight),
    ("battery", UsableKind::Battery),
    ("keycard", UsableKind::Keycard),
    ("water", UsableKind::Water),
];

impl UsableKind {
    /// Classify an item by name. `None` means the item has no use.
    pub fn classify(item_name: &str) -> Option<UsableKind> {
        let lc_name = item_name.to_lowercase();
        RULES
            .iter()
            .find(|(fragment, _)| lc_name.contains(fragment))
            .map(|(_, kind)| *kind)
    }
}

/// What happened when an item was used successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseEffect {
    /// Flashlight switched on; names of items it revealed in the room, in room order.
    FlashlightOn { revealed: Vec<String> },
    /// Flashlight was already on; nothing changed.
    FlashlightAlreadyOn,
    /// Battery installed; power is back.
    PowerRestored,
    /// A keycard went into the reader; `total` is the new count.
    KeycardInserted { total: u8 },
    /// Water drunk. `protected` is set in the wet carpet area.
    WaterDrunk { protected: bool },
}

/// Apply the use rule for `item_name` in `room`.
///
/// # Errors
/// - `GameError::NotUsable` if the name matches no rule, or the rule does not apply
///   in this room or state (battery outside the electrical room or after power is back,
///   keycard away from a card reader). The two causes are not distinguished.
pub fn use_item(item_name: &str, room: &mut Room, progress: &mut Progress) -> Result<UseEffect, GameError> {
    let not_usable = || GameError::NotUsable(item_name.to_string());
    let kind = UsableKind::classify(item_name).ok_or_else(not_usable)?;
    info!("using '{item_name}' as {kind:?} in {}", room.name);

    match kind {
        UsableKind::Flashlight => {
            if progress.switch_on_flashlight() {
                let revealed = room.reveal_hidden();
                info!("flashlight on, revealed {} item(s) in {}", revealed.len(), room.name);
                Ok(UseEffect::FlashlightOn { revealed })
            } else {
                Ok(UseEffect::FlashlightAlreadyOn)
            }
        },
        UsableKind::Battery => {
            if room.name == ELECTRICAL_ROOM && !progress.power_fixed() {
                progress.restore_power();
                info!("power restored");
                Ok(UseEffect::PowerRestored)
            } else {
                Err(not_usable())
            }
        },
        UsableKind::Keycard => {
            if CARD_READER_ROOMS.contains(&room.name.as_str()) {
                let total = progress.insert_keycard();
                info!("keycard '{item_name}' inserted, {total} so far");
                Ok(UseEffect::KeycardInserted { total })
            } else {
                Err(not_usable())
            }
        },
        UsableKind::Water => Ok(UseEffect::WaterDrunk {
            protected: room.name == WET_CARPET_AREA,
        }),
    }
}
