//! Save confirmation screen

use super::{AppState, KeyInput, QuestionInputState, Transition};
use crate::gui::{draw_centered, Theme};
use crate::text::{FontSize, Fonts};
use chrono::{DateTime, Local};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Shown after a successful save; 'y' adds another question, 'n' quits
#[derive(Debug)]
pub struct SavedState {
    file_name: String,
    saved_at: DateTime<Local>,
}

impl SavedState {
    pub fn new(file_name: String) -> Self {
        SavedState {
            file_name,
            saved_at: Local::now(),
        }
    }

    pub fn handle_key(&mut self, key: KeyInput) -> Transition {
        match key {
            KeyInput::Char('y' | 'Y') => {
                log::info!("Adding another question to {}", self.file_name);
                Transition::To(AppState::QuestionInput(QuestionInputState::new(
                    self.file_name.clone(),
                )))
            }
            KeyInput::Char('n' | 'N') => Transition::Quit,
            _ => Transition::Stay,
        }
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        fonts: &Fonts,
        theme: &Theme,
    ) -> Result<(), String> {
        let (_, screen_height) = canvas.window().size();
        let middle = screen_height as i32 / 2;

        draw_centered(canvas, fonts, "Question saved!", middle - 110, theme.title_color, FontSize::Large)?;

        let saved_to = format!(
            "Added to {} at {}",
            self.file_name,
            self.saved_at.format("%H:%M:%S")
        );
        draw_centered(canvas, fonts, &saved_to, middle - 50, theme.text_color, FontSize::Small)?;

        draw_centered(
            canvas,
            fonts,
            "Add another question? (Y/N)",
            middle + 20,
            theme.text_color,
            FontSize::Large,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_starts_fresh_question_for_same_file() {
        let mut state = SavedState::new("does-not-exist.txt".to_string());
        match state.handle_key(KeyInput::Char('Y')) {
            Transition::To(AppState::QuestionInput(question)) => {
                assert_eq!(question.file_name(), "does-not-exist.txt");
                assert!(question.fields().iter().all(|f| f.is_empty()));
            }
            other => panic!("expected question input, got {:?}", other),
        }
    }

    #[test]
    fn test_no_quits() {
        let mut state = SavedState::new("quiz.txt".to_string());
        assert!(matches!(state.handle_key(KeyInput::Char('n')), Transition::Quit));
        assert!(matches!(state.handle_key(KeyInput::Char('N')), Transition::Quit));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut state = SavedState::new("quiz.txt".to_string());
        for key in [KeyInput::Char('x'), KeyInput::Enter, KeyInput::Tab, KeyInput::Escape] {
            assert!(matches!(state.handle_key(key), Transition::Stay));
        }
        assert_eq!(state.file_name, "quiz.txt");
    }
}
