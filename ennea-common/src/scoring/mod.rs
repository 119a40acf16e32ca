//! Scoring engine
//!
//! Maps 45 Likert answers (1-5) onto nine personality categories and picks
//! the dominant type. Pure and synchronous; safe to call from any task.

pub mod category;
pub mod engine;
pub mod questions;
pub mod radar;

pub use category::{Category, CATEGORY_COUNT};
pub use engine::{
    classify, classify_lenient, AnswerSet, Classification, ScoreVector, DEFAULT_ANSWER,
    MAX_ANSWER, MIN_ANSWER,
};
pub use questions::{Question, QUESTIONS, QUESTION_COUNT};
pub use radar::{radar_chart, RadarPoint, FULL_MARK};
