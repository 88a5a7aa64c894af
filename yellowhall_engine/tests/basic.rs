use std::path::PathBuf;

use yellowhall_engine as yh;
use yh::room::{Direction, RoomId};
use yh::*;

fn shipped(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

fn shipped_session() -> Session {
    let world = load_world_from(&shipped("world.ron"), &shipped("help_commands.toml")).expect("shipped world loads");
    Session::new(world)
}

/// Feed lines to a session, returning everything pushed to the view.
fn play(session: &mut Session, lines: &[&str]) -> Vec<ViewItem> {
    let mut view = View::new();
    for line in lines {
        session.submit(line, &mut view);
    }
    view.items
}

fn errors(items: &[ViewItem]) -> Vec<String> {
    items
        .iter()
        .filter_map(|i| match i {
            ViewItem::Error(msg) => Some(msg.clone()),
            _ => None,
        })
        .collect()
}

fn current_room(session: &Session) -> String {
    session.world().player_room_ref().unwrap().name.clone()
}

/// Two rooms with a card reader in the second and any number of items.
fn reader_session(items: &[(&str, bool)]) -> Session {
    let mut hall = Room::new(RoomId(0), "hall", "Yellow Hallway", "A hall.");
    let mut office = Room::new(RoomId(1), "office", "Empty Office", "An office.");
    hall.connect(Direction::West, RoomId(1));
    office.connect(Direction::East, RoomId(0));
    for (name, takeable) in items {
        office.add_item(Item::new(name, name, "Something.", *takeable, false));
    }
    let player = Player::new("tester", RoomId(0), 100, Inventory::default());
    Session::new(YellowhallWorld::new("t", "i", vec![hall, office], player).unwrap())
}

#[test]
fn test_lib_version() {
    assert!(!yh::YELLOWHALL_VERSION.is_empty());
}

#[test]
fn start_describes_the_first_room() {
    let mut session = shipped_session();
    let mut view = View::new();
    session.start(&mut view).unwrap();
    assert!(matches!(
        &view.items[0],
        ViewItem::RoomDescription { name, .. } if name == "Yellow Hallway"
    ));
    assert!(session.world().rooms[0].visited);
}

#[test]
fn walls_keep_the_player_in_place() {
    let mut session = shipped_session();
    for line in ["go east", "west", "go sideways"] {
        let items = play(&mut session, &[line]);
        assert_eq!(current_room(&session), "Yellow Hallway");
        assert_eq!(errors(&items).len(), 1, "{line} should be refused");
    }
    let items = play(&mut session, &["e"]);
    assert_eq!(
        errors(&items),
        vec!["Cannot move east - there's a wall in that direction".to_string()]
    );
    assert_eq!(session.state(), &SessionState::Running);
}

#[test]
fn movement_follows_exits() {
    let mut session = shipped_session();
    play(&mut session, &["n", "go east"]);
    assert_eq!(current_room(&session), "Electrical Room");
    play(&mut session, &["west", "s", "south", "go west", "s"]);
    assert_eq!(current_room(&session), "Exit");
}

#[test]
fn taking_twice_fails_the_second_time() {
    let mut session = shipped_session();
    let items = play(&mut session, &["north", "take flashlight", "take flashlight"]);
    assert!(items.contains(&ViewItem::ActionSuccess("You take the flashlight.".into())));
    assert_eq!(errors(&items), vec!["There is no 'flashlight' here".to_string()]);
    assert_eq!(session.world().player.inventory.len(), 1);
}

#[test]
fn scenery_cannot_be_taken() {
    let mut session = shipped_session();
    let items = play(&mut session, &["take note"]);
    assert_eq!(items, vec![ViewItem::ActionFailure("You can't take the note.".into())]);
    assert!(errors(&items).is_empty());
}

#[test]
fn eleventh_take_fails_and_leaves_the_room_alone() {
    let names: Vec<String> = (1..=11).map(|n| format!("brick{n}")).collect();
    let items: Vec<(&str, bool)> = names.iter().map(|n| (n.as_str(), true)).collect();
    let mut session = reader_session(&items);
    play(&mut session, &["west"]);
    for name in &names[..10] {
        play(&mut session, &[format!("take {name}").as_str()]);
    }
    assert_eq!(session.world().player.inventory.len(), 10);

    let before = session.world().rooms[1].contents.clone();
    let items = play(&mut session, &["take brick11"]);
    assert_eq!(errors(&items), vec!["Your inventory is full! Drop something first".to_string()]);
    assert_eq!(session.world().rooms[1].contents, before);
    assert_eq!(session.world().player.inventory.len(), 10);

    play(&mut session, &["drop brick1", "take brick11"]);
    assert!(session.world().player.has_named("brick11"));
}

#[test]
fn examine_then_yes_equals_take() {
    let mut by_take = shipped_session();
    play(&mut by_take, &["north", "take flashlight"]);

    let mut by_examine = shipped_session();
    let items = play(&mut by_examine, &["north", "examine flashlight"]);
    assert!(items.iter().any(ViewItem::is_item_description));
    assert!(by_examine.state().is_awaiting_take());
    assert_eq!(by_examine.prompt(), yh::repl::TAKE_PROMPT);
    play(&mut by_examine, &["y"]);

    assert_eq!(by_examine.state(), &SessionState::Running);
    assert_eq!(
        by_examine.world().player.inventory.item_names(),
        by_take.world().player.inventory.item_names()
    );
    assert_eq!(by_examine.world().rooms[1].contents, by_take.world().rooms[1].contents);
}

#[test]
fn take_answer_is_not_parsed_as_a_command() {
    let mut session = shipped_session();
    play(&mut session, &["north", "inspect flashlight", "south"]);
    // "south" answered the question with a no, so the player hasn't moved
    assert_eq!(current_room(&session), "Storage Room");
    assert!(session.world().player.inventory.is_empty());
    assert!(session.world().rooms[1].has_named("flashlight"));
}

#[test]
fn examining_scenery_asks_nothing() {
    let mut session = shipped_session();
    play(&mut session, &["examine note"]);
    assert_eq!(session.state(), &SessionState::Running);
    let items = play(&mut session, &["examine unicorn"]);
    assert_eq!(errors(&items), vec!["There is no 'unicorn' here".to_string()]);
}

#[test]
fn flashlight_reveals_hidden_keycard_once() {
    let mut session = shipped_session();
    let items = play(&mut session, &["north", "take flashlight", "north", "look"]);
    let listed = items.iter().rev().find_map(|i| match i {
        ViewItem::RoomItems(names) => Some(names.clone()),
        _ => None,
    });
    assert!(!listed.unwrap().contains(&"red-keycard".to_string()));

    let items = play(&mut session, &["use flashlight"]);
    assert!(items.contains(&ViewItem::ItemRevealed("red-keycard".into())));
    assert!(session.world().progress.has_flashlight());

    let items = play(&mut session, &["use flashlight"]);
    assert_eq!(items, vec![ViewItem::ActionSuccess("The flashlight is already on.".into())]);
}

#[test]
fn reachable_names_follow_the_light_and_the_pockets() {
    let mut session = shipped_session();
    play(&mut session, &["north", "take flashlight", "north"]);
    assert_eq!(session.reachable_item_names(), vec!["scratches", "wall", "flashlight"]);

    play(&mut session, &["use flashlight"]);
    assert_eq!(
        session.reachable_item_names(),
        vec!["scratches", "wall", "red-keycard", "flashlight"]
    );
}

#[test]
fn battery_only_works_once_in_the_electrical_room() {
    let mut session = shipped_session();
    play(&mut session, &["n", "e", "take battery", "w"]);
    let items = play(&mut session, &["use battery"]);
    assert_eq!(errors(&items), vec!["You can't use the 'battery' here".to_string()]);
    assert!(!session.world().progress.power_fixed());

    play(&mut session, &["e", "use battery"]);
    assert!(session.world().progress.power_fixed());
    let items = play(&mut session, &["use battery"]);
    assert_eq!(errors(&items), vec!["You can't use the 'battery' here".to_string()]);
}

#[test]
fn use_requires_carrying_the_item() {
    let mut session = shipped_session();
    let items = play(&mut session, &["use note"]);
    assert_eq!(items, vec![ViewItem::ActionFailure("You don't have a note.".into())]);
}

#[test]
fn two_keycards_report_progress() {
    let mut session = reader_session(&[("red-keycard", true), ("blue-keycard", true)]);
    session.world_mut().progress.restore_power();
    let items = play(
        &mut session,
        &["w", "take red-keycard", "take blue-keycard", "use red-keycard", "use blue-keycard"],
    );
    assert_eq!(
        items.last(),
        Some(&ViewItem::KeycardProgress { found: 2, required: 3 })
    );
    assert_eq!(session.state(), &SessionState::Running);
}

#[test]
fn three_keycards_with_power_escape() {
    let mut session = reader_session(&[("red-keycard", true), ("blue-keycard", true), ("green-keycard", true)]);
    session.world_mut().progress.restore_power();
    play(
        &mut session,
        &["w", "take red-keycard", "take blue-keycard", "take green-keycard"],
    );
    let state_before = session.state().clone();
    assert_eq!(state_before, SessionState::Running);

    let items = play(
        &mut session,
        &["use red-keycard", "use blue-keycard", "use green-keycard"],
    );
    assert!(items.last().is_some_and(ViewItem::is_escaped));
    assert_eq!(session.state(), &SessionState::Terminated(Ending::Escaped));
}

#[test]
fn keycards_without_power_do_not_escape() {
    let mut session = reader_session(&[("red-keycard", true)]);
    let items = play(
        &mut session,
        &["w", "take red-keycard", "use red-keycard", "use red-keycard", "use red-keycard"],
    );
    assert_eq!(items.last(), Some(&ViewItem::PowerStillMissing));
    assert_eq!(session.state(), &SessionState::Running);
    // the reader has three slots
    play(&mut session, &["use red-keycard"]);
    assert_eq!(session.world().progress.keycards_found(), 3);
}

#[test]
fn keycard_away_from_a_reader_is_not_usable() {
    let mut session = reader_session(&[("red-keycard", true)]);
    let items = play(&mut session, &["w", "take red-keycard", "e", "use red-keycard"]);
    assert_eq!(errors(&items), vec!["You can't use the 'red-keycard' here".to_string()]);
    assert_eq!(session.world().progress.keycards_found(), 0);
}

#[test]
fn water_is_always_drinkable() {
    let mut session = shipped_session();
    play(&mut session, &["s", "w", "take water"]);
    let items = play(&mut session, &["use water"]);
    assert_eq!(items, vec![ViewItem::ActionSuccess("You drink some water. Refreshing!".into())]);

    let items = play(&mut session, &["e", "e", "use water"]);
    assert!(items.contains(&ViewItem::ActionSuccess(
        "You feel protected from the toxic environment.".into()
    )));
    assert!(session.world().player.has_named("water"));
}

#[test]
fn unknown_and_incomplete_commands() {
    let mut session = shipped_session();
    let items = play(&mut session, &["dance", "", "go", "take", "use"]);
    assert_eq!(errors(&items), vec!["Invalid input".to_string(), "Invalid input".to_string()]);
    assert!(items.contains(&ViewItem::Question("Give the direction".into())));
    assert!(items.contains(&ViewItem::Question("Which object?".into())));
    assert!(items.contains(&ViewItem::Question("Which item?".into())));
    assert_eq!(session.state(), &SessionState::Running);
}

#[test]
fn quit_ends_and_later_input_is_ignored() {
    let mut session = shipped_session();
    play(&mut session, &["quit"]);
    assert_eq!(session.state(), &SessionState::Terminated(Ending::Quit));
    let items = play(&mut session, &["north"]);
    assert!(items.is_empty());
    assert_eq!(current_room(&session), "Yellow Hallway");
}

#[test]
fn full_walkthrough_escapes() {
    let mut session = shipped_session();
    let route = [
        "north",
        "take flashlight",
        "north",
        "use flashlight",
        "take red-keycard",
        "south",
        "east",
        "take battery",
        "use battery",
        "west",
        "south",
        "south",
        "take blue-keycard",
        "east",
        "take green-keycard",
        "west",
        "west",
        "status",
        "inventory",
        "use red-keycard",
        "use blue-keycard",
        "south",
        "use green-keycard",
    ];
    let items = play(&mut session, &route);
    assert!(errors(&items).is_empty(), "unexpected errors: {:?}", errors(&items));
    assert!(items.contains(&ViewItem::KeycardProgress { found: 2, required: 3 }));
    assert_eq!(session.state(), &SessionState::Terminated(Ending::Escaped));
    assert_eq!(current_room(&session), "Exit");
    assert_eq!(session.world().turn_count, route.len());
}
