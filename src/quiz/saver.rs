//! Quiz file writer
//!
//! `QuestionSaver` re-opens the quiz file for every save and appends one
//! block; nothing about the file is kept in memory between saves.

use super::record::{AnswerLetter, QuestionRecord};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

const BLOCK_START: &str = "::QUESTION::";
const BLOCK_END: &str = "::END::";
const ANSWER_PREFIX: &str = "ANSWER: ";
const CHOICE_LABELS: [char; 4] = ['a', 'b', 'c', 'd'];

/// Errors that can occur while writing or reading a quiz file
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed quiz file at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Appends question blocks to quiz files
#[derive(Debug, Default, Clone, Copy)]
pub struct QuestionSaver;

impl QuestionSaver {
    pub fn new() -> Self {
        QuestionSaver
    }

    /// Appends one question block to `path`, creating the file if needed
    ///
    /// The block is written with a single `write_all` so a failed save
    /// leaves at most a partial trailing block behind.
    pub fn append_question(
        &self,
        path: impl AsRef<Path>,
        record: &QuestionRecord,
    ) -> Result<(), SaveError> {
        let path = path.as_ref();
        let block = format_block(record);

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(block.as_bytes())?;
        file.flush()?;

        log::info!("Appended question to {}", path.display());
        Ok(())
    }
}

/// Formats a record as a quiz file block, trailing blank line included
pub fn format_block(record: &QuestionRecord) -> String {
    let mut block = String::new();
    block.push_str(BLOCK_START);
    block.push('\n');
    block.push_str(&record.prompt);
    block.push('\n');

    for (label, choice) in CHOICE_LABELS.iter().zip(record.choices.iter()) {
        block.push_str(&format!("{}) {}\n", label, choice));
    }

    block.push_str(&format!("{}{}\n", ANSWER_PREFIX, record.answer.as_char()));
    block.push_str(BLOCK_END);
    block.push_str("\n\n");
    block
}

/// Reads every question block from `path`
///
/// A file that doesn't exist yet holds no questions.
pub fn read_questions(path: impl AsRef<Path>) -> Result<Vec<QuestionRecord>, SaveError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path)?;
    parse_questions(&contents)
}

/// Parses quiz file contents into records, in file order
pub fn parse_questions(contents: &str) -> Result<Vec<QuestionRecord>, SaveError> {
    let mut records = Vec::new();
    let mut lines = contents.lines().enumerate().map(|(i, line)| (i + 1, line));

    while let Some((line_no, line)) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }
        if line != BLOCK_START {
            return Err(malformed(line_no, format!("expected {}", BLOCK_START)));
        }

        let mut next_line = |what: &str| {
            lines
                .next()
                .ok_or_else(|| malformed(line_no, format!("block ends before {}", what)))
        };

        let (_, prompt) = next_line("the prompt")?;
        let prompt = prompt.to_string();

        let mut choices: [String; 4] = Default::default();
        for (slot, label) in choices.iter_mut().zip(CHOICE_LABELS) {
            let (choice_line, text) = next_line("a choice")?;
            let prefix = format!("{})", label);
            let choice = text
                .strip_prefix(&prefix)
                .ok_or_else(|| malformed(choice_line, format!("expected choice {}", prefix)))?;
            *slot = choice.strip_prefix(' ').unwrap_or(choice).to_string();
        }

        let (answer_line, text) = next_line("the answer")?;
        let answer = text
            .strip_prefix(ANSWER_PREFIX)
            .and_then(AnswerLetter::parse)
            .ok_or_else(|| malformed(answer_line, "expected ANSWER: <a-d>".to_string()))?;

        let (end_line, text) = next_line(BLOCK_END)?;
        if text != BLOCK_END {
            return Err(malformed(end_line, format!("expected {}", BLOCK_END)));
        }

        records.push(QuestionRecord {
            prompt,
            choices,
            answer,
        });
    }

    Ok(records)
}

fn malformed(line: usize, reason: String) -> SaveError {
    SaveError::Malformed { line, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> QuestionRecord {
        QuestionRecord {
            prompt: "2+2?".to_string(),
            choices: ["3", "4", "5", "6"].map(String::from),
            answer: AnswerLetter::B,
        }
    }

    #[test]
    fn test_format_block_layout() {
        let expected = "::QUESTION::\n2+2?\na) 3\nb) 4\nc) 5\nd) 6\nANSWER: b\n::END::\n\n";
        assert_eq!(format_block(&sample_record()), expected);
    }

    #[test]
    fn test_append_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.txt");

        QuestionSaver::new().append_question(&path, &sample_record()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, format_block(&sample_record()));
    }

    #[test]
    fn test_two_saves_keep_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.txt");
        let saver = QuestionSaver::new();

        let first = sample_record();
        let second = QuestionRecord {
            prompt: "Capital of France?".to_string(),
            choices: ["Rome", "Madrid", "Paris", "Berlin"].map(String::from),
            answer: AnswerLetter::C,
        };

        saver.append_question(&path, &first).unwrap();
        saver.append_question(&path, &second).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, format!("{}{}", format_block(&first), format_block(&second)));

        let records = read_questions(&path).unwrap();
        assert_eq!(records, vec![first, second]);
    }

    #[test]
    fn test_append_reports_io_failure() {
        let dir = tempfile::tempdir().unwrap();

        // A directory can't be opened for appending
        let result = QuestionSaver::new().append_question(dir.path(), &sample_record());
        assert!(matches!(result, Err(SaveError::Io(_))));
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let records = read_questions(dir.path().join("missing.txt")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_rejects_truncated_block() {
        let result = parse_questions("::QUESTION::\n2+2?\na) 3\nb) 4\n");
        assert!(matches!(result, Err(SaveError::Malformed { .. })));
    }

    #[test]
    fn test_parse_rejects_bad_answer_line() {
        let contents = "::QUESTION::\nQ\na) 1\nb) 2\nc) 3\nd) 4\nANSWER: z\n::END::\n\n";
        match parse_questions(contents) {
            Err(SaveError::Malformed { line, .. }) => assert_eq!(line, 7),
            other => panic!("expected malformed error, got {:?}", other),
        }
    }
}
