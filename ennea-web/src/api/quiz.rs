//! Quiz endpoints: question table and answer submission

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use ennea_common::db::NewTestResult;
use ennea_common::scoring::{self, AnswerSet, Question, ScoreVector};
use ennea_common::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use super::error::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub total: usize,
    pub questions: &'static [Question],
}

/// GET /api/questions
pub async fn list_questions() -> Json<QuestionsResponse> {
    let questions = scoring::questions::all();
    Json(QuestionsResponse {
        success: true,
        total: questions.len(),
        questions,
    })
}

/// Submission body
///
/// `answers` is kept as raw JSON so that non-numeric entries produce the
/// same 400 error shape as out-of-range ones. Bodies that do not fit this
/// shape at all are turned into the same 400 by [`submit_test`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub answers: Option<Vec<Value>>,
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub result_id: Uuid,
    pub personality_type: u8,
    pub scores: ScoreVector,
    pub confidence: f64,
}

/// POST /api/test/submit
///
/// Validates the answers, scores them and stores the result.
pub async fn submit_test(
    State(state): State<AppState>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected submission body: {}", rejection.body_text());
        invalid_format()
    })?;
    let answers = request.answers.ok_or_else(invalid_format)?;
    let answers = AnswerSet::new(integer_answers(&answers)?)?;

    let user_id = request.user_id.filter(|id| !id.trim().is_empty());
    let stored = state
        .results
        .save(NewTestResult::score(answers, user_id))
        .await?;

    info!(
        "Scored submission {} as type {} ({} store)",
        stored.id,
        stored.personality_type,
        state.results.backend()
    );

    Ok(Json(SubmitResponse {
        success: true,
        result_id: stored.id,
        personality_type: stored.personality_type,
        scores: stored.scores,
        confidence: stored.confidence_score,
    }))
}

fn invalid_format() -> ApiError {
    ApiError::BadRequest("Invalid answers format. Expected array of 45 answers.".to_string())
}

fn integer_answers(values: &[Value]) -> Result<Vec<i64>, Error> {
    values
        .iter()
        .enumerate()
        .map(|(position, value)| {
            value.as_i64().ok_or_else(|| {
                Error::InvalidInput(format!(
                    "Invalid answer values. Answer at position {} is not an integer between 1 and 5.",
                    position
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_answers_accepts_integers() {
        let values = vec![json!(1), json!(5), json!(3)];
        assert_eq!(integer_answers(&values).unwrap(), vec![1, 5, 3]);
    }

    #[test]
    fn test_integer_answers_rejects_other_json() {
        for bad in [json!("3"), json!(2.5), json!(null), json!([1])] {
            let err = integer_answers(&[json!(1), bad]).unwrap_err();
            assert!(err.to_string().contains("position 1"), "{}", err);
        }
    }
}
