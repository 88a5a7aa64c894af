//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop around a [`Session`]. A session
//! takes one input line at a time, routes it to a handler in one of the
//! submodules, and turns any [`GameError`] the handler returns into a message
//! for the player. Nothing a player types can stop the session except `quit`
//! or a successful escape.

mod input;
pub mod inventory;
pub mod item;
pub mod look;
pub mod movement;
pub mod system;

pub use inventory::*;
pub use item::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use anyhow::{Context, Result};
use log::{error, info};
use uuid::Uuid;
use variantly::Variantly;

use crate::command::{Command, is_affirmative, parse_command};
use crate::goal::REQUIRED_KEYCARDS;
use crate::style::GameStyle;
use crate::world::YellowhallWorld;
use crate::{GameError, View, ViewItem};

use input::{InputEvent, InputManager};

/// The question asked after examining something that can be picked up.
pub const TAKE_PROMPT: &str = "Do you want to take it? (y/n): ";

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Quit,
    Escaped,
}

/// Where the session stands between two input lines.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum SessionState {
    /// Waiting for the next command.
    Running,
    /// The last command was `examine` on a takeable item; the next line answers
    /// the take question and is not parsed as a command.
    AwaitingTake { item_id: Uuid, item_name: String },
    /// Finished. Further input is ignored.
    Terminated(Ending),
}

/// Control flow signal returned by handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    ConfirmTake { item_id: Uuid, item_name: String },
    End(Ending),
}

/// One game from first room to `quit` or escape.
#[derive(Debug, Clone)]
pub struct Session {
    world: YellowhallWorld,
    state: SessionState,
}

impl Session {
    pub fn new(world: YellowhallWorld) -> Self {
        Self {
            world,
            state: SessionState::Running,
        }
    }

    pub fn world(&self) -> &YellowhallWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut YellowhallWorld {
        &mut self.world
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminated()
    }

    /// Describe the starting room. Call once before the first `submit`.
    ///
    /// # Errors
    /// - if the player's room can't be found
    pub fn start(&mut self, view: &mut View) -> Result<()> {
        info!("session started for {}", self.world.player.name);
        describe_room(&mut self.world, view)
    }

    /// The text to show when asking for the next line.
    pub fn prompt(&self) -> String {
        match &self.state {
            SessionState::AwaitingTake { .. } => TAKE_PROMPT.to_string(),
            _ => format!(
                "\n[Turn: {}|Keycards: {}/{}]>> ",
                self.world.turn_count + 1,
                self.world.progress.keycards_found(),
                REQUIRED_KEYCARDS
            ),
        }
    }

    /// Item names the player could sensibly type next: what `look` would list
    /// here, followed by what they carry.
    pub fn reachable_item_names(&self) -> Vec<String> {
        let lit = self.world.progress.has_flashlight();
        let mut names: Vec<String> = self
            .world
            .player_room_ref()
            .map(|room| room.visible_items(lit).map(|item| item.name.clone()).collect())
            .unwrap_or_default();
        names.extend(self.world.player.inventory.item_names());
        names
    }

    /// Process exactly one line of input and return the resulting state.
    pub fn submit(&mut self, line: &str, view: &mut View) -> SessionState {
        match self.state.clone() {
            SessionState::Terminated(ending) => {
                info!("input '{line}' ignored, session already ended ({ending:?})");
            },
            SessionState::AwaitingTake { item_id, item_name } => {
                self.state = SessionState::Running;
                let answer = take_answer_handler(&mut self.world, view, item_id, &item_name, is_affirmative(line));
                self.apply(answer.map(|()| ReplControl::Continue), view);
            },
            SessionState::Running => {
                let command = parse_command(line);
                self.world.turn_count += 1;
                info!("turn {}: {command:?}", self.world.turn_count);
                let outcome = self.dispatch(command, view);
                self.apply(outcome, view);
            },
        }
        self.state.clone()
    }

    fn dispatch(&mut self, command: Command, view: &mut View) -> Result<ReplControl> {
        #[allow(clippy::enum_glob_use)]
        use Command::*;
        let world = &mut self.world;
        let continued = |result: Result<()>| result.map(|()| ReplControl::Continue);

        match command {
            Go(direction) => continued(move_to_handler(world, view, &direction)),
            Look => continued(look_handler(world, view)),
            Examine(thing) => examine_handler(world, view, &thing),
            Take(thing) => continued(take_handler(world, view, &thing)),
            Drop(thing) => continued(drop_handler(world, view, &thing)),
            Inventory => {
                inv_handler(world, view);
                Ok(ReplControl::Continue)
            },
            Use(thing) => use_handler(world, view, &thing),
            Status => continued(status_handler(world, view)),
            Help => {
                help_handler(world, view);
                Ok(ReplControl::Continue)
            },
            Quit => Ok(quit_handler(world, view)),
            MissingTarget(question) => {
                view.push(ViewItem::Question(question.to_string()));
                Ok(ReplControl::Continue)
            },
            Unknown => {
                view.push(ViewItem::Error("Invalid input".to_string()));
                Ok(ReplControl::Continue)
            },
        }
    }

    /// Record a handler's outcome. This is the one place a failed command becomes a message.
    fn apply(&mut self, outcome: Result<ReplControl>, view: &mut View) {
        match outcome {
            Ok(ReplControl::Continue) => {},
            Ok(ReplControl::ConfirmTake { item_id, item_name }) => {
                self.state = SessionState::AwaitingTake { item_id, item_name };
            },
            Ok(ReplControl::End(ending)) => {
                info!("session ended: {ending:?} after {} turns", self.world.turn_count);
                self.state = SessionState::Terminated(ending);
            },
            Err(err) => {
                if let Some(game_err) = err.downcast_ref::<GameError>() {
                    info!("command refused: {game_err:?}");
                    view.push(ViewItem::Error(game_err.to_string()));
                } else {
                    error!("command failed: {err:#}");
                    view.push(ViewItem::Error(format!("Something went wrong: {err}")));
                }
            },
        }
    }
}

/// Run the main read–eval–print loop until the session ends.
///
/// End of input is treated as `quit`; Ctrl-C cancels the current line.
///
/// # Errors
/// - if the starting room is missing or terminal input fails
pub fn run_repl(session: &mut Session) -> Result<()> {
    let mut view = View::new();
    let mut input_manager = InputManager::new();

    session.start(&mut view)?;
    view.flush();

    while !session.is_over() {
        input_manager.set_item_names(session.reachable_item_names());
        let prompt = session.prompt().prompt_style().to_string();
        let line = match input_manager.read_line(&prompt).context("reading player input")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
        };
        session.submit(&line, &mut view);
        view.flush();
    }
    Ok(())
}
