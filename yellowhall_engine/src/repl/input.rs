//! Terminal input for the Yellowhall REPL.
//!
//! Lines come through rustyline when stdin is a terminal. Tab completes command
//! words, and after `take`, `examine`, `use` or `drop` it completes the names
//! of items the player can see or is carrying. When stdin is not a terminal, or
//! the editor breaks, plain lines are read from stdin instead.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Outcome of reading a line from the REPL input.
#[derive(Debug, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Words offered by tab completion, kept sorted.
const COMMAND_TERMS: &[&str] = &[
    "drop", "east", "examine", "exit", "go", "go east", "go north", "go south", "go west", "help", "inspect",
    "inventory", "look", "north", "progress", "quit", "south", "status", "take", "use", "west",
];

/// Command words whose second word names an item.
const ITEM_VERBS: &[&str] = &["drop", "examine", "inspect", "take", "use"];

type ReplEditor = rustyline::Editor<YellowhallHelper, DefaultHistory>;

#[derive(Default)]
struct YellowhallHelper {
    item_names: Vec<String>,
}

impl Helper for YellowhallHelper {}

impl Completer for YellowhallHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        Ok(complete_input(&prefix, start, &self.item_names))
    }
}

impl Hinter for YellowhallHelper {
    type Hint = String;
}

impl Highlighter for YellowhallHelper {}

impl Validator for YellowhallHelper {}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

/// Completion candidates for `prefix`, which begins at byte `start` of the line.
/// Returns the offset the candidates replace from.
fn complete_input(prefix: &str, start: usize, item_names: &[String]) -> (usize, Vec<Pair>) {
    if let Some(partial) = item_target(prefix) {
        let offset = start + prefix.len() - partial.len();
        return (offset, item_completions(partial, item_names));
    }
    (start, command_completions(prefix))
}

/// The partly typed item name after an item verb, if that is what the prefix is.
fn item_target(prefix: &str) -> Option<&str> {
    let (verb, rest) = prefix.split_once(char::is_whitespace)?;
    if !ITEM_VERBS.contains(&verb.to_lowercase().as_str()) {
        return None;
    }
    let partial = rest.trim_start();
    // only the first word after the verb is ever read
    (!partial.contains(char::is_whitespace)).then_some(partial)
}

fn item_completions(partial: &str, item_names: &[String]) -> Vec<Pair> {
    let lower = partial.to_lowercase();
    let mut names: Vec<String> = item_names
        .iter()
        .map(|name| name.to_lowercase())
        .filter(|name| name.starts_with(&lower))
        .collect();
    names.sort_unstable();
    names.dedup();
    names
        .into_iter()
        .map(|name| Pair {
            display: name.clone(),
            replacement: name,
        })
        .collect()
}

fn command_completions(prefix: &str) -> Vec<Pair> {
    if prefix.is_empty() {
        return Vec::new();
    }
    let lower = prefix.to_lowercase();
    COMMAND_TERMS
        .iter()
        .filter(|term| term.starts_with(&lower))
        .map(|term| Pair {
            display: (*term).to_string(),
            replacement: (*term).to_string(),
        })
        .collect()
}

/// Reads player input, through rustyline when possible.
pub struct InputManager {
    editor: Option<LineEditor>,
    buffer: String,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let editor = if io::stdin().is_terminal() {
            match LineEditor::open() {
                Ok(editor) => {
                    info!("line editor ready");
                    Some(editor)
                },
                Err(err) => {
                    warn!("line editor unavailable ({err}), reading plain stdin");
                    None
                },
            }
        } else {
            info!("stdin is not a terminal, reading plain lines");
            None
        };
        Self {
            editor,
            buffer: String::new(),
        }
    }

    /// Replace the item names offered after an item verb.
    pub fn set_item_names(&mut self, names: Vec<String>) {
        if let Some(line_editor) = self.editor.as_mut()
            && let Some(helper) = line_editor.editor.helper_mut()
        {
            helper.item_names = names;
        }
    }

    /// Read one line. If the editor fails, it is dropped for the rest of the
    /// session and the line is read from plain stdin.
    ///
    /// # Errors
    /// - if reading plain stdin fails
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        if let Some(line_editor) = self.editor.as_mut() {
            match line_editor.read_line(prompt) {
                Ok(event) => return Ok(event),
                Err(err) => {
                    warn!("line editor failed ({err}), switching to plain stdin");
                    self.editor = None;
                },
            }
        }
        self.read_plain(prompt)
    }

    fn read_plain(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;
        self.buffer.clear();
        if io::stdin().read_line(&mut self.buffer)? == 0 {
            return Ok(InputEvent::Eof);
        }
        Ok(InputEvent::Line(self.buffer.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// A rustyline editor plus the file its history is kept in.
struct LineEditor {
    editor: ReplEditor,
    history: Option<PathBuf>,
}

impl LineEditor {
    fn open() -> rustyline::Result<Self> {
        let mut editor = ReplEditor::new()?;
        editor.set_helper(Some(YellowhallHelper::default()));
        let history = dirs::data_local_dir().map(|base| history_path_under(&base));
        if let Some(path) = history.as_deref() {
            load_history(&mut editor, path);
        }
        Ok(Self { editor, history })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let event = readline_event(self.editor.readline(prompt))?;
        if let InputEvent::Line(line) = &event {
            self.remember(line);
        }
        Ok(event)
    }

    fn remember(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if let Err(err) = self.editor.add_history_entry(line) {
            warn!("could not add '{line}' to history: {err}");
        }
        if let Some(path) = self.history.as_deref()
            && let Err(err) = self.editor.save_history(path)
        {
            warn!("could not save history to {}: {err}", path.display());
        }
    }
}

fn load_history(editor: &mut ReplEditor, path: &Path) {
    if let Some(dir) = path.parent()
        && let Err(err) = fs::create_dir_all(dir)
    {
        warn!("could not create history directory {}: {err}", dir.display());
    }
    match editor.load_history(path) {
        Ok(()) => info!("loaded command history from {}", path.display()),
        Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            info!("no command history at {} yet", path.display());
        },
        Err(err) => warn!("could not load history from {}: {err}", path.display()),
    }
}

/// Ctrl-C and Ctrl-D become events; anything else is an I/O failure.
fn readline_event(result: rustyline::Result<String>) -> io::Result<InputEvent> {
    match result {
        Ok(line) => Ok(InputEvent::Line(line)),
        Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
        Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
        Err(ReadlineError::Io(err)) => Err(err),
        Err(other) => Err(io::Error::other(other)),
    }
}

fn history_path_under(base: &Path) -> PathBuf {
    base.join("yellowhall").join("history.txt")
}
