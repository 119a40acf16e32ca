//! Stored result lookup

use axum::{
    extract::{Path, State},
    Json,
};
use ennea_common::personality;
use ennea_common::scoring::{radar_chart, RadarPoint, CATEGORY_COUNT};
use ennea_common::{time, uuid_utils};
use serde::Serialize;
use uuid::Uuid;

use super::error::ApiError;
use super::types::PersonalityTypeDetails;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResultBody {
    pub id: Uuid,
    pub personality_type: u8,
    /// Ordered by type number 1-9
    pub scores: [u32; CATEGORY_COUNT],
    pub confidence: f64,
    pub created_at: String,
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponse {
    pub success: bool,
    pub test_result: TestResultBody,
    pub personality_type_details: PersonalityTypeDetails,
    pub radar_chart: Vec<RadarPoint>,
}

/// GET /api/results/:id
pub async fn get_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResultResponse>, ApiError> {
    let id = uuid_utils::parse_result_id(&id)
        .ok_or_else(|| ApiError::BadRequest("Invalid result ID format".to_string()))?;

    let stored = state
        .results
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Test result not found".to_string()))?;

    let details = personality::by_number(stored.personality_type).ok_or_else(|| {
        ApiError::Internal(format!(
            "Result {} references unknown type {}",
            stored.id, stored.personality_type
        ))
    })?;

    let radar = radar_chart(&stored.classification());

    Ok(Json(ResultResponse {
        success: true,
        test_result: TestResultBody {
            id: stored.id,
            personality_type: stored.personality_type,
            scores: stored.scores.as_type_ordered(),
            confidence: stored.confidence_score,
            created_at: time::to_rfc3339(&stored.created_at),
            user_id: stored.user_id,
        },
        personality_type_details: details.into(),
        radar_chart: radar,
    }))
}
