use crate::state::KeyInput;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Actions the event loop handles
///
/// This enum decouples SDL2 events from the screens: screens only ever
/// see [`KeyInput`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Window close requested
    Quit,
    /// A key press for the active screen
    Key(KeyInput),
}

/// InputSystem translates SDL2 events into AppActions
///
/// Printable characters come from `TextInput` events, so shift state and
/// keyboard layout are already applied. Editing and navigation keys
/// come from `KeyDown` events.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Polls all pending SDL2 events and returns the actions they produce
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<AppAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            self.translate(event, &mut actions);
        }

        actions
    }

    fn translate(&self, event: Event, actions: &mut Vec<AppAction>) {
        match event {
            Event::Quit { .. } => {
                actions.push(AppAction::Quit);
            }
            Event::TextInput { text, .. } => {
                actions.extend(text_actions(&text));
            }
            Event::KeyDown {
                keycode: Some(key), ..
            } => {
                if let Some(input) = control_key(key) {
                    actions.push(AppAction::Key(input));
                }
            }
            _ => {
                // Mouse, window and other events are not used
            }
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// One `Char` action per character of a text input event
pub fn text_actions(text: &str) -> impl Iterator<Item = AppAction> + '_ {
    text.chars().map(|c| AppAction::Key(KeyInput::Char(c)))
}

/// Maps the non-printing keys the screens react to
pub fn control_key(key: Keycode) -> Option<KeyInput> {
    match key {
        Keycode::Backspace => Some(KeyInput::Backspace),
        Keycode::Tab => Some(KeyInput::Tab),
        Keycode::Return | Keycode::KpEnter => Some(KeyInput::Enter),
        Keycode::Escape => Some(KeyInput::Escape),
        _ => None,
    }
}
