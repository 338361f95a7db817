use serde::{Deserialize, Serialize};

use crate::models::domain::{MatchResult, MentorProfile};

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RankResponse<'a> {
    pub matches: Vec<MatchResult<'a>>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the mentor listing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct MentorListResponse<'a> {
    pub mentors: Vec<&'a MentorProfile>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub mentors: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
