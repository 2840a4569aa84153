//! Quiz file name entry screen

use super::{is_typeable, AppState, KeyInput, QuestionInputState, Transition};
use crate::gui::{draw_centered, TextField, Theme};
use crate::text::{FontSize, Fonts};
use sdl2::render::Canvas;
use sdl2::video::Window;

const FIELD_WIDTH: u32 = 560;

/// First screen: collects the name of the file questions are appended to
#[derive(Debug, Default)]
pub struct FileNameState {
    buffer: String,
}

impl FileNameState {
    pub fn new() -> Self {
        FileNameState {
            buffer: String::new(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn handle_key(&mut self, key: KeyInput) -> Transition {
        match key {
            KeyInput::Char(c) if is_typeable(c) => {
                self.buffer.push(c);
                Transition::Stay
            }
            KeyInput::Backspace => {
                self.buffer.pop();
                Transition::Stay
            }
            KeyInput::Enter => {
                let file_name = self.buffer.trim();
                if file_name.is_empty() {
                    log::warn!("File name is empty, not continuing");
                    return Transition::Stay;
                }

                log::info!("Writing questions to {}", file_name);
                Transition::To(AppState::QuestionInput(QuestionInputState::new(
                    file_name.to_string(),
                )))
            }
            KeyInput::Escape => Transition::Quit,
            KeyInput::Char(_) | KeyInput::Tab => Transition::Stay,
        }
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        fonts: &Fonts,
        theme: &Theme,
    ) -> Result<(), String> {
        let (screen_width, screen_height) = canvas.window().size();

        draw_centered(canvas, fonts, "Quiz Maker", 120, theme.title_color, FontSize::Large)?;
        draw_centered(
            canvas,
            fonts,
            "Which file should the questions go to?",
            200,
            theme.text_color,
            FontSize::Small,
        )?;

        let width = FIELD_WIDTH.min(screen_width.saturating_sub(40));
        let x = (screen_width as i32 - width as i32) / 2;
        TextField::new("File name", x, 250, width)
            .focused(true)
            .render(canvas, fonts, theme, &self.buffer)?;

        draw_centered(
            canvas,
            fonts,
            "ENTER continue   ESC quit",
            screen_height as i32 - 50,
            theme.hint_color,
            FontSize::Small,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> FileNameState {
        let mut state = FileNameState::new();
        for c in text.chars() {
            state.handle_key(KeyInput::Char(c));
        }
        state
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut state = typed("quiz.txtx");
        state.handle_key(KeyInput::Backspace);
        assert_eq!(state.buffer(), "quiz.txt");
    }

    #[test]
    fn test_backspace_on_empty_buffer() {
        let mut state = FileNameState::new();
        assert!(matches!(state.handle_key(KeyInput::Backspace), Transition::Stay));
        assert_eq!(state.buffer(), "");
    }

    #[test]
    fn test_whitespace_file_name_is_rejected() {
        for name in ["", " ", "   ", " \u{3000} "] {
            let mut state = typed(name);
            assert!(matches!(state.handle_key(KeyInput::Enter), Transition::Stay));
            assert_eq!(state.buffer(), name);
        }
    }

    #[test]
    fn test_file_name_is_trimmed() {
        let mut state = typed("  quiz.txt  ");
        match state.handle_key(KeyInput::Enter) {
            Transition::To(AppState::QuestionInput(question)) => {
                assert_eq!(question.file_name(), "quiz.txt");
            }
            other => panic!("expected question input, got {:?}", other),
        }
    }

    #[test]
    fn test_tab_is_ignored() {
        let mut state = typed("quiz");
        assert!(matches!(state.handle_key(KeyInput::Tab), Transition::Stay));
        assert_eq!(state.buffer(), "quiz");
    }
}
