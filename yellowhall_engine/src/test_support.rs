//! Small hand-built world shared by unit tests.
//!
//! ```text
//! Empty Office (2) --west--> Electrical Room (1) --south--> Yellow Hallway (0)
//!                  <--east--                     <--north--
//! ```

use crate::room::{Direction, RoomId};
use crate::{Inventory, Item, Player, Room, YellowhallWorld};

pub(crate) fn test_world() -> YellowhallWorld {
    let mut hallway = Room::new(RoomId(0), "hallway", "Yellow Hallway", "Yellow walls in every direction.");
    hallway.connect(Direction::North, RoomId(1));
    hallway.add_item(Item::new("flashlight", "flashlight", "A heavy rubber flashlight.", true, false));
    hallway.add_item(Item::new("note", "note", "A note taped to the wall.", false, false));

    let mut electrical = Room::new(RoomId(1), "electrical", "Electrical Room", "Humming breaker panels.");
    electrical.connect(Direction::South, RoomId(0));
    electrical.connect(Direction::East, RoomId(2));
    electrical.add_item(Item::new("battery", "battery", "A fat industrial battery.", true, false));

    let mut office = Room::new(RoomId(2), "office", "Empty Office", "A desk and a card reader.");
    office.connect(Direction::West, RoomId(1));
    for color in ["red", "blue", "green"] {
        let name = format!("{color}-keycard");
        office.add_item(Item::new(&name, &name, "A plastic keycard.", true, true));
    }

    let player = Player::new("tester", RoomId(0), 100, Inventory::default());
    match YellowhallWorld::new("Test", "A test world.", vec![hallway, electrical, office], player) {
        Ok(world) => world,
        Err(err) => panic!("test world is malformed: {err}"),
    }
}
