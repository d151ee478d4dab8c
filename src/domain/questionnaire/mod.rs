//! Questionnaire module - questions, answers and the submission lifecycle.

mod answers;
mod dimension;
mod questions;
mod session;

pub use answers::AnswerSet;
pub use dimension::{group_by_dimension, Dimension};
pub use questions::{Question, QUESTIONS, QUESTION_COUNT};
pub use session::SubmissionStatus;
