//! Answer validation and classification
//!
//! Scores are accumulated in question-table order into nine category
//! buckets. The dominant type is the bucket with the highest total; ties
//! resolve to the lowest type number.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::ops::Index;

use super::category::{Category, CATEGORY_COUNT};
use super::questions::{QUESTIONS, QUESTION_COUNT};
use crate::{Error, Result};

/// Lowest Likert answer value
pub const MIN_ANSWER: u8 = 1;

/// Highest Likert answer value
pub const MAX_ANSWER: u8 = 5;

/// Value substituted for missing answers by [`classify_lenient`]
pub const DEFAULT_ANSWER: u8 = MIN_ANSWER;

/// A complete, validated set of answers aligned to the question table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet(Vec<u8>);

impl AnswerSet {
    /// Validate raw answers
    ///
    /// # Errors
    /// - [`Error::InvalidAnswerCount`] if the length differs from the question table
    /// - [`Error::AnswerOutOfRange`] for the first value outside 1-5
    pub fn new(answers: Vec<i64>) -> Result<Self> {
        if answers.len() != QUESTION_COUNT {
            return Err(Error::InvalidAnswerCount {
                expected: QUESTION_COUNT,
                actual: answers.len(),
            });
        }

        let mut values = Vec::with_capacity(QUESTION_COUNT);
        for (position, &value) in answers.iter().enumerate() {
            if value < i64::from(MIN_ANSWER) || value > i64::from(MAX_ANSWER) {
                return Err(Error::AnswerOutOfRange { position, value });
            }
            values.push(value as u8);
        }

        Ok(AnswerSet(values))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl TryFrom<Vec<i64>> for AnswerSet {
    type Error = Error;

    fn try_from(answers: Vec<i64>) -> Result<Self> {
        AnswerSet::new(answers)
    }
}

/// Per-category score totals, indexed in type-number order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreVector([u32; CATEGORY_COUNT]);

impl ScoreVector {
    /// Build from totals ordered by type number 1..=9
    pub fn from_type_ordered(scores: &[u32]) -> Option<Self> {
        let array: [u32; CATEGORY_COUNT] = scores.try_into().ok()?;
        Some(ScoreVector(array))
    }

    pub fn get(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    /// Sum of all category totals
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Highest category total
    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Totals ordered by type number 1..=9
    pub fn as_type_ordered(&self) -> [u32; CATEGORY_COUNT] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// First category (in type order) holding the highest total
    pub fn dominant(&self) -> Category {
        let mut best = Category::ALL[0];
        for category in Category::ALL.iter().copied().skip(1) {
            if self.get(category) > self.get(best) {
                best = category;
            }
        }
        best
    }

    fn add(&mut self, category: Category, value: u8) {
        self.0[category.index()] += u32::from(value);
    }
}

impl Index<Category> for ScoreVector {
    type Output = u32;

    fn index(&self, category: Category) -> &u32 {
        &self.0[category.index()]
    }
}

/// Serialized as `{ "perfectionist": n, ..., "peacemaker": n }` in type order
impl Serialize for ScoreVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT))?;
        for (category, score) in self.iter() {
            map.serialize_entry(category.name(), &score)?;
        }
        map.end()
    }
}

/// Outcome of scoring one answer set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Type number 1-9 of the dominant category
    pub dominant_type: u8,
    pub scores: ScoreVector,
}

impl Classification {
    pub fn dominant_category(&self) -> Category {
        // dominant_type is always produced from a Category
        Category::from_type_number(self.dominant_type).unwrap_or(Category::Perfectionist)
    }
}

/// Classify a validated answer set
pub fn classify(answers: &AnswerSet) -> Classification {
    score_with(|index| answers.0[index])
}

/// Classify raw answers, filling gaps with the default answer
///
/// Missing trailing entries and zero values count as [`DEFAULT_ANSWER`].
/// Other values are used as given and extra entries are ignored. Prefer
/// [`AnswerSet::new`] plus [`classify`] for anything taking user input.
pub fn classify_lenient(answers: &[u8]) -> Classification {
    score_with(|index| match answers.get(index) {
        Some(&value) if value != 0 => value,
        _ => DEFAULT_ANSWER,
    })
}

fn score_with(answer_at: impl Fn(usize) -> u8) -> Classification {
    let mut scores = ScoreVector::default();
    for (index, question) in QUESTIONS.iter().enumerate() {
        scores.add(question.category, answer_at(index));
    }

    Classification {
        dominant_type: scores.dominant().type_number(),
        scores,
    }
}
