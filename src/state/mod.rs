//! Screen State Machine
//!
//! The application is always on exactly one screen:
//!
//! - `FileName` - typing the name of the quiz file
//! - `QuestionInput` - typing a prompt, four choices and the answer letter
//! - `Saved` - confirming the save and asking whether to add another
//!
//! Each screen owns its input buffers. Key handling never swaps the screen
//! itself; it returns a [`Transition`] and the event loop performs the swap.
//! A screen is discarded when the application moves away from it.

pub mod file_name;
pub mod question_input;
pub mod saved;

pub use file_name::FileNameState;
pub use question_input::QuestionInputState;
pub use saved::SavedState;

use crate::gui::Theme;
use crate::quiz::QuestionSaver;
use crate::text::Fonts;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// A key press as the screens see it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A printable character (already shifted / layout-mapped)
    Char(char),
    Backspace,
    Tab,
    Enter,
    Escape,
}

/// What the event loop should do after a key was handled
#[derive(Debug)]
pub enum Transition {
    /// Stay on the current screen
    Stay,
    /// Replace the current screen
    To(AppState),
    /// End the application
    Quit,
}

/// The active screen and its data
#[derive(Debug)]
pub enum AppState {
    FileName(FileNameState),
    QuestionInput(QuestionInputState),
    Saved(SavedState),
}

impl AppState {
    /// The screen the application starts on
    pub fn initial() -> Self {
        AppState::FileName(FileNameState::new())
    }

    /// Short name for log messages
    pub fn name(&self) -> &'static str {
        match self {
            AppState::FileName(_) => "file name",
            AppState::QuestionInput(_) => "question input",
            AppState::Saved(_) => "saved",
        }
    }

    pub fn handle_key(&mut self, key: KeyInput, saver: &QuestionSaver) -> Transition {
        match self {
            AppState::FileName(state) => state.handle_key(key),
            AppState::QuestionInput(state) => state.handle_key(key, saver),
            AppState::Saved(state) => state.handle_key(key),
        }
    }

    /// Draws the screen's text and widgets (the background is already drawn)
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        fonts: &Fonts,
        theme: &Theme,
    ) -> Result<(), String> {
        match self {
            AppState::FileName(state) => state.render(canvas, fonts, theme),
            AppState::QuestionInput(state) => state.render(canvas, fonts, theme),
            AppState::Saved(state) => state.render(canvas, fonts, theme),
        }
    }
}

/// Printable characters go into text buffers, control characters never do
fn is_typeable(c: char) -> bool {
    !c.is_control()
}
