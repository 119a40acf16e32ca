//! Radar chart series for the results viewer

use serde::Serialize;

use super::engine::{Classification, MAX_ANSWER};
use super::questions::QUESTIONS_PER_CATEGORY;

/// Highest possible category total (5 questions x answer 5)
pub const FULL_MARK: u32 = QUESTIONS_PER_CATEGORY as u32 * MAX_ANSWER as u32;

/// One spoke of the radar chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    #[serde(rename = "type")]
    pub label: String,
    pub score: u32,
    pub full_mark: u32,
}

/// Nine points in type order, labelled "Type N\nName" (e.g. "Type 1\nPerfectionist")
pub fn radar_chart(classification: &Classification) -> Vec<RadarPoint> {
    classification
        .scores
        .iter()
        .map(|(category, score)| RadarPoint {
            label: format!("Type {}\n{}", category.type_number(), category.title()),
            score,
            full_mark: FULL_MARK,
        })
        .collect()
}
