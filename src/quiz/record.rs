//! Question records and validation of the six input fields

use thiserror::Error;

/// Number of input fields on the question screen (prompt, four choices, answer)
pub const FIELD_COUNT: usize = 6;

/// One of the four answer letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    /// Parses a single letter a-d in either case
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        match letter.to_ascii_lowercase() {
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            'c' => Some(Self::C),
            'd' => Some(Self::D),
            _ => None,
        }
    }

    /// Lowercase letter as persisted in the quiz file
    pub fn as_char(&self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::D => 'd',
        }
    }
}

/// The input fields of the question screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Prompt,
    ChoiceA,
    ChoiceB,
    ChoiceC,
    ChoiceD,
    Answer,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Self::Prompt,
        Self::ChoiceA,
        Self::ChoiceB,
        Self::ChoiceC,
        Self::ChoiceD,
        Self::Answer,
    ];

    pub fn index(&self) -> usize {
        match self {
            Self::Prompt => 0,
            Self::ChoiceA => 1,
            Self::ChoiceB => 2,
            Self::ChoiceC => 3,
            Self::ChoiceD => 4,
            Self::Answer => 5,
        }
    }

    /// Field at `index`, wrapping around past the last field
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % FIELD_COUNT]
    }

    /// Next field in tab order (wraps from `Answer` back to `Prompt`)
    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Prompt => "Question",
            Self::ChoiceA => "a)",
            Self::ChoiceB => "b)",
            Self::ChoiceC => "c)",
            Self::ChoiceD => "d)",
            Self::Answer => "Answer (a-d)",
        }
    }
}

/// Reasons a set of input fields can't become a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} field is empty", .0.label())]
    EmptyField(Field),

    #[error("answer must be one of a, b, c, d (got {0:?})")]
    InvalidAnswer(String),
}

/// A validated multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub prompt: String,
    pub choices: [String; 4],
    pub answer: AnswerLetter,
}

impl QuestionRecord {
    /// Builds a record from the six field buffers (indexed by `Field::index`)
    ///
    /// Every field must be non-empty and the answer field must be exactly
    /// one of the letters a-d.
    pub fn from_fields(fields: &[String; FIELD_COUNT]) -> Result<Self, ValidationError> {
        if let Some(field) = Field::ALL
            .iter()
            .find(|field| fields[field.index()].is_empty())
        {
            return Err(ValidationError::EmptyField(*field));
        }

        let answer_text = &fields[Field::Answer.index()];
        let answer = AnswerLetter::parse(answer_text)
            .ok_or_else(|| ValidationError::InvalidAnswer(answer_text.clone()))?;

        Ok(QuestionRecord {
            prompt: fields[Field::Prompt.index()].clone(),
            choices: [
                fields[Field::ChoiceA.index()].clone(),
                fields[Field::ChoiceB.index()].clone(),
                fields[Field::ChoiceC.index()].clone(),
                fields[Field::ChoiceD.index()].clone(),
            ],
            answer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: [&str; FIELD_COUNT]) -> [String; FIELD_COUNT] {
        values.map(String::from)
    }

    #[test]
    fn test_answer_letter_parse_is_case_insensitive() {
        assert_eq!(AnswerLetter::parse("b"), Some(AnswerLetter::B));
        assert_eq!(AnswerLetter::parse("B"), Some(AnswerLetter::B));
        assert_eq!(AnswerLetter::parse("D"), Some(AnswerLetter::D));
        assert_eq!(AnswerLetter::parse(" d "), None);
        assert_eq!(AnswerLetter::parse("e"), None);
        assert_eq!(AnswerLetter::parse("ab"), None);
        assert_eq!(AnswerLetter::parse(""), None);
    }

    #[test]
    fn test_field_tab_order_wraps() {
        for i in 0..FIELD_COUNT {
            assert_eq!(Field::from_index(i).next().index(), (i + 1) % FIELD_COUNT);
        }
        assert_eq!(Field::Answer.next(), Field::Prompt);
    }

    #[test]
    fn test_record_from_valid_fields() {
        let record = QuestionRecord::from_fields(&fields(["2+2?", "3", "4", "5", "6", "B"])).unwrap();

        assert_eq!(record.prompt, "2+2?");
        assert_eq!(record.choices[1], "4");
        assert_eq!(record.answer, AnswerLetter::B);
        assert_eq!(record.answer.as_char(), 'b');
    }

    #[test]
    fn test_record_rejects_empty_field() {
        let result = QuestionRecord::from_fields(&fields(["2+2?", "3", "", "5", "6", "b"]));
        assert_eq!(result, Err(ValidationError::EmptyField(Field::ChoiceB)));

        let result = QuestionRecord::from_fields(&fields(["", "", "", "", "", ""]));
        assert_eq!(result, Err(ValidationError::EmptyField(Field::Prompt)));
    }

    #[test]
    fn test_record_rejects_bad_answer() {
        let result = QuestionRecord::from_fields(&fields(["2+2?", "3", "4", "5", "6", "x"]));
        assert_eq!(result, Err(ValidationError::InvalidAnswer("x".to_string())));
    }
}
