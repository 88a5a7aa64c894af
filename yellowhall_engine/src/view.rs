//! View module.
//!
//! Handlers never print directly. They push [`ViewItem`]s into the `View`, which
//! groups them by section and renders the whole frame once at the end of the turn.

pub mod icons;
mod render_action;
mod render_env;
mod render_item;
mod render_progress;
mod render_system;
pub mod view_item;

pub use view_item::ViewItem;

use textwrap::termwidth;

use crate::style::GameStyle as _;

/// Top-level grouping of output within a frame, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Environment,
    DirectResult,
    WorldResponse,
    System,
}

/// One line of the exit list shown with a room.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExitLine {
    pub direction: String,
    pub destination: String,
    pub dest_visited: bool,
}

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// True if any item of the given section is waiting to be shown.
    fn has_section(&self, section: Section) -> bool {
        self.items.iter().any(|i| i.section() == section)
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        if self.has_section(Section::Environment) {
            println!("{:.>width$}\n", "scene".section_style(), width = self.width);
            render_env::room_description(self);
            render_env::room_item_list(self);
            render_env::room_exit_list(self);
        }
        if self.has_section(Section::DirectResult) {
            println!("{:.>width$}\n", "results".section_style(), width = self.width);
            render_item::item_detail(self);
            render_item::inventory(self);
            render_action::action_success(self);
            render_action::action_failure(self);
            render_action::errors(self);
            render_action::questions(self);
        }
        if self.has_section(Section::WorldResponse) {
            println!("\n{:.>width$}\n", "responses".section_style(), width = self.width);
            render_progress::revealed_items(self);
            render_progress::keycard_progress(self);
            render_progress::escaped(self);
        }
        if self.has_section(Section::System) {
            println!("\n{:.>width$}\n", "game".section_style(), width = self.width);
            render_system::show_help(self);
            render_system::status(self);
            render_system::engine_message(self);
            render_system::quit_summary(self);
        }

        // clear the buffer for the next turn
        self.items.clear();

        // create a little space before the next prompt
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_clears_the_frame() {
        let mut view = View::new();
        view.push(ViewItem::ActionSuccess("You take the battery.".into()));
        view.push(ViewItem::KeycardProgress { found: 1, required: 3 });
        assert_eq!(view.items.len(), 2);
        view.flush();
        assert!(view.items.is_empty());
    }

    #[test]
    fn sections_order_environment_first() {
        assert!(Section::Environment < Section::DirectResult);
        assert!(Section::WorldResponse < Section::System);
    }
}
