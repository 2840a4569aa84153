//! Question entry screen

use super::{is_typeable, AppState, KeyInput, SavedState, Transition};
use crate::gui::{draw_centered, TextField, Theme};
use crate::quiz::saver::read_questions;
use crate::quiz::{Field, QuestionRecord, QuestionSaver, FIELD_COUNT};
use crate::text::{FontSize, Fonts};
use sdl2::render::Canvas;
use sdl2::video::Window;

const FIELD_WIDTH: u32 = 680;
const FIELD_SPACING: i32 = 8;
const FIRST_FIELD_Y: i32 = 96;

/// Collects one question: a prompt, four choices and the answer letter
///
/// Tab moves focus through the six fields and wraps around. Enter
/// validates and saves; on any failure the buffers are kept so the user
/// can fix the input (or the file) and press Enter again.
#[derive(Debug)]
pub struct QuestionInputState {
    file_name: String,
    fields: [String; FIELD_COUNT],
    focus: Field,
    /// Questions already in the file when this screen opened (None if unreadable)
    existing_questions: Option<usize>,
}

impl QuestionInputState {
    /// Empty question screen for `file_name`
    pub fn new(file_name: String) -> Self {
        let existing_questions = match read_questions(&file_name) {
            Ok(records) => Some(records.len()),
            Err(e) => {
                log::warn!("Could not read existing questions from {}: {}", file_name, e);
                None
            }
        };

        QuestionInputState {
            file_name,
            fields: Default::default(),
            focus: Field::Prompt,
            existing_questions,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn fields(&self) -> &[String; FIELD_COUNT] {
        &self.fields
    }

    pub fn existing_questions(&self) -> Option<usize> {
        self.existing_questions
    }

    fn focused_buffer(&mut self) -> &mut String {
        &mut self.fields[self.focus.index()]
    }

    pub fn handle_key(&mut self, key: KeyInput, saver: &QuestionSaver) -> Transition {
        match key {
            KeyInput::Char(c) if is_typeable(c) => {
                self.focused_buffer().push(c);
                Transition::Stay
            }
            KeyInput::Backspace => {
                self.focused_buffer().pop();
                Transition::Stay
            }
            KeyInput::Tab => {
                self.focus = self.focus.next();
                Transition::Stay
            }
            KeyInput::Enter => self.save(saver),
            KeyInput::Escape => Transition::Quit,
            KeyInput::Char(_) => Transition::Stay,
        }
    }

    fn save(&self, saver: &QuestionSaver) -> Transition {
        let record = match QuestionRecord::from_fields(&self.fields) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Question not saved: {}", e);
                return Transition::Stay;
            }
        };

        match saver.append_question(&self.file_name, &record) {
            Ok(()) => Transition::To(AppState::Saved(SavedState::new(self.file_name.clone()))),
            Err(e) => {
                log::error!("Failed to save question to {}: {}", self.file_name, e);
                Transition::Stay
            }
        }
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        fonts: &Fonts,
        theme: &Theme,
    ) -> Result<(), String> {
        let (screen_width, screen_height) = canvas.window().size();

        let title = format!("Questions for {}", self.file_name);
        draw_centered(canvas, fonts, &title, 24, theme.title_color, FontSize::Large)?;

        let status = match self.existing_questions {
            Some(1) => "1 question in file so far".to_string(),
            Some(count) => format!("{} questions in file so far", count),
            None => "File could not be read".to_string(),
        };
        draw_centered(canvas, fonts, &status, 60, theme.hint_color, FontSize::Small)?;

        let width = FIELD_WIDTH.min(screen_width.saturating_sub(40));
        let x = (screen_width as i32 - width as i32) / 2;
        let mut y = FIRST_FIELD_Y;

        for field in Field::ALL {
            let widget = TextField::new(field.label(), x, y, width).focused(field == self.focus);
            widget.render(canvas, fonts, theme, &self.fields[field.index()])?;
            y += widget.height(fonts) as i32 + FIELD_SPACING;
        }

        draw_centered(
            canvas,
            fonts,
            "TAB next field   ENTER save   ESC quit",
            screen_height as i32 - 40,
            theme.hint_color,
            FontSize::Small,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn state_in(dir: &tempfile::TempDir) -> QuestionInputState {
        let path = dir.path().join("quiz.txt");
        QuestionInputState::new(path.to_str().unwrap().to_string())
    }

    #[test]
    fn test_tab_cycles_focus() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let saver = QuestionSaver::new();

        for i in 0..FIELD_COUNT {
            assert_eq!(state.focus.index(), i);
            state.handle_key(KeyInput::Tab, &saver);
            assert_eq!(state.focus.index(), (i + 1) % FIELD_COUNT);
        }
        assert_eq!(state.focus, Field::Prompt);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let saver = QuestionSaver::new();

        state.handle_key(KeyInput::Char('Q'), &saver);
        state.handle_key(KeyInput::Tab, &saver);
        state.handle_key(KeyInput::Char('x'), &saver);
        state.handle_key(KeyInput::Char('y'), &saver);
        state.handle_key(KeyInput::Backspace, &saver);

        assert_eq!(state.fields()[Field::Prompt.index()], "Q");
        assert_eq!(state.fields()[Field::ChoiceA.index()], "x");
        assert!(state.fields()[2..].iter().all(|f| f.is_empty()));
    }

    #[test]
    fn test_backspace_on_empty_field() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let saver = QuestionSaver::new();

        state.handle_key(KeyInput::Backspace, &saver);
        state.handle_key(KeyInput::Backspace, &saver);
        assert_eq!(state.fields()[Field::Prompt.index()], "");
    }

    #[test]
    fn test_invalid_answer_keeps_buffers() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let saver = QuestionSaver::new();

        state.fields = ["2+2?", "3", "4", "5", "6", "e"].map(String::from);
        assert!(matches!(state.handle_key(KeyInput::Enter, &saver), Transition::Stay));

        assert_eq!(state.fields()[Field::Answer.index()], "e");
        assert!(!dir.path().join("quiz.txt").exists());
    }

    #[test]
    fn test_save_failure_keeps_buffers() {
        let dir = tempfile::tempdir().unwrap();
        let saver = QuestionSaver::new();

        // The quiz "file" is a directory, so appending fails
        let mut state = QuestionInputState::new(dir.path().to_str().unwrap().to_string());
        state.fields = ["2+2?", "3", "4", "5", "6", "b"].map(String::from);

        assert!(matches!(state.handle_key(KeyInput::Enter, &saver), Transition::Stay));
        assert_eq!(state.fields()[Field::Prompt.index()], "2+2?");
    }

    #[test]
    fn test_counts_existing_questions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.txt");
        fs::write(
            &path,
            "::QUESTION::\nQ\na) 1\nb) 2\nc) 3\nd) 4\nANSWER: a\n::END::\n\n",
        )
        .unwrap();

        let state = QuestionInputState::new(path.to_str().unwrap().to_string());
        assert_eq!(state.existing_questions(), Some(1));

        fs::write(&path, "not a quiz file").unwrap();
        let state = QuestionInputState::new(path.to_str().unwrap().to_string());
        assert_eq!(state.existing_questions(), None);
    }
}
