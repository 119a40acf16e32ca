//! Database models

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::scoring::{classify, AnswerSet, Classification, ScoreVector};

/// Confidence reported for every classification
pub const DEFAULT_CONFIDENCE: f64 = 0.85;

/// A scored submission that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTestResult {
    pub user_id: Option<String>,
    pub answers: Vec<u8>,
    pub classification: Classification,
    pub confidence_score: f64,
}

impl NewTestResult {
    /// Score a validated answer set
    pub fn score(answers: AnswerSet, user_id: Option<String>) -> Self {
        let classification = classify(&answers);
        Self {
            user_id,
            answers: answers.into_inner(),
            classification,
            confidence_score: DEFAULT_CONFIDENCE,
        }
    }
}

/// A persisted submission
#[derive(Debug, Clone, PartialEq)]
pub struct StoredTestResult {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub answers: Vec<u8>,
    /// Dominant type number 1-9
    pub personality_type: u8,
    pub scores: ScoreVector,
    pub confidence_score: f64,
    pub created_at: DateTime<Utc>,
}

impl StoredTestResult {
    pub fn from_new(id: Uuid, created_at: DateTime<Utc>, new: NewTestResult) -> Self {
        Self {
            id,
            user_id: new.user_id,
            answers: new.answers,
            personality_type: new.classification.dominant_type,
            scores: new.classification.scores,
            confidence_score: new.confidence_score,
            created_at,
        }
    }

    pub fn classification(&self) -> Classification {
        Classification {
            dominant_type: self.personality_type,
            scores: self.scores,
        }
    }
}
