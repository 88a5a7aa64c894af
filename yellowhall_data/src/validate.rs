use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use yellowhall_data::{GameDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         ..GameDef::default()
///     },
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         name: "Start".into(),
///         desc: "A room.".into(),
///         exits: Vec::new(),
///     }],
///     items: Vec::new(),
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut items = HashSet::new();

    track_ids(
        "room",
        world.rooms.iter().map(|r| r.id.as_str()),
        &mut rooms,
        &mut errors,
    );
    track_ids(
        "item",
        world.items.iter().map(|i| i.id.as_str()),
        &mut items,
        &mut errors,
    );

    if world.rooms.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "world has no rooms".to_string(),
        });
    }

    if world.game.player.inventory_capacity == 0 {
        errors.push(ValidationError::InvalidValue {
            context: "player inventory capacity must be at least 1".to_string(),
        });
    }

    for room in &world.rooms {
        let mut seen_dirs = HashSet::new();
        for exit in &room.exits {
            let dir = exit.direction.to_lowercase();
            if !DIRECTIONS.contains(&dir.as_str()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' exit direction '{}'", room.id, exit.direction),
                });
            } else if !seen_dirs.insert(dir) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' has more than one '{}' exit", room.id, exit.direction),
                });
            }
            check_ref(
                "room",
                &exit.to,
                &rooms,
                format!("room '{}' exit '{}'", room.id, exit.direction),
                &mut errors,
            );
        }
    }

    for item in &world.items {
        check_ref("room", &item.room, &rooms, format!("item '{}'", item.id), &mut errors);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str) -> RoomDef {
        RoomDef {
            id: id.to_string(),
            name: format!("Room {id}"),
            desc: "Test room".into(),
            exits: Vec::new(),
        }
    }

    fn base_world() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Demo".into(),
                intro: "Intro".into(),
                player: PlayerDef::default(),
            },
            rooms: vec![room("start")],
            ..WorldDef::default()
        }
    }

    fn item_in_room(id: &str, room_id: &str) -> ItemDef {
        ItemDef {
            id: id.to_string(),
            name: format!("Item {id}"),
            desc: "Test item".into(),
            room: room_id.to_string(),
            takeable: true,
            hidden: false,
        }
    }

    #[test]
    fn valid_world_has_no_errors() {
        let mut world = base_world();
        world.rooms.push(room("hall"));
        world.rooms[0].exits.push(ExitDef {
            direction: "north".into(),
            to: "hall".into(),
        });
        world.items = vec![item_in_room("lamp", "hall")];
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut world = base_world();
        world.rooms = vec![room("same"), room("same")];

        let errors = validate_world(&world);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::DuplicateId { kind, id } if *kind == "room" && id == "same"))
        );
    }

    #[test]
    fn missing_references_are_reported() {
        let mut world = base_world();
        world.items = vec![item_in_room("lantern", "missing_room")];

        let errors = validate_world(&world);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::MissingReference { kind, id, .. } if *kind == "room" && id == "missing_room")));
    }

    #[test]
    fn unknown_direction_is_reported() {
        let mut world = base_world();
        world.rooms[0].exits.push(ExitDef {
            direction: "up".into(),
            to: "start".into(),
        });

        let errors = validate_world(&world);
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], ValidationError::InvalidValue { context } if context.contains("'up'")));
    }

    #[test]
    fn repeated_direction_is_reported() {
        let mut world = base_world();
        for _ in 0..2 {
            world.rooms[0].exits.push(ExitDef {
                direction: "east".into(),
                to: "start".into(),
            });
        }
        assert_eq!(validate_world(&world).len(), 1);
    }

    #[test]
    fn empty_world_and_zero_capacity_are_reported() {
        let mut world = base_world();
        world.rooms.clear();
        world.game.player.inventory_capacity = 0;

        let errors = validate_world(&world);
        assert_eq!(errors.len(), 2);
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}
