//! Personality type endpoints

use axum::{extract::Path, Json};
use ennea_common::personality::{self, PersonalityType};
use serde::Serialize;

use super::error::ApiError;

/// Type details in API shape
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityTypeDetails {
    pub type_number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub growth_areas: &'static [&'static str],
    pub characteristics: &'static [&'static str],
}

impl From<&'static PersonalityType> for PersonalityTypeDetails {
    fn from(t: &'static PersonalityType) -> Self {
        Self {
            type_number: t.type_number,
            title: t.title,
            description: t.description,
            strengths: t.strengths,
            growth_areas: t.growth_areas,
            characteristics: t.characteristics,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TypesResponse {
    pub success: bool,
    pub types: Vec<PersonalityTypeDetails>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeResponse {
    pub success: bool,
    pub personality_type: PersonalityTypeDetails,
}

/// GET /api/types
pub async fn list_types() -> Json<TypesResponse> {
    Json(TypesResponse {
        success: true,
        types: personality::all().iter().map(PersonalityTypeDetails::from).collect(),
    })
}

/// GET /api/types/:number
pub async fn get_type(Path(number): Path<String>) -> Result<Json<TypeResponse>, ApiError> {
    let details = number
        .parse::<u8>()
        .ok()
        .and_then(personality::by_number)
        .ok_or_else(|| {
            ApiError::BadRequest(format!("Invalid personality type: {} (expected 1-9)", number))
        })?;

    Ok(Json(TypeResponse {
        success: true,
        personality_type: details.into(),
    }))
}
