//! Quiz data and the quiz file format
//!
//! - `record`: question records, answer letters and field validation
//! - `saver`: appends records to (and reads them back from) a quiz file
//!
//! # File Format
//!
//! Each question is one block, blocks are appended in save order:
//!
//! ```text
//! ::QUESTION::
//! 2+2?
//! a) 3
//! b) 4
//! c) 5
//! d) 6
//! ANSWER: b
//! ::END::
//!
//! ```

pub mod record;
pub mod saver;

pub use record::{AnswerLetter, Field, QuestionRecord, ValidationError, FIELD_COUNT};
pub use saver::{QuestionSaver, SaveError};
