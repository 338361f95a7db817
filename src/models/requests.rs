use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{MentorProfile, StudentPreferences};

/// Request to score a single mentor against a student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub mentor: MentorProfile,
    pub student: StudentPreferences,
}

/// Request to rank mentors for a student
///
/// When `mentors` is omitted the service ranks its catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    pub student: StudentPreferences,
    #[serde(default)]
    pub mentors: Option<Vec<MentorProfile>>,
    #[serde(default)]
    pub filter: Option<FilterParams>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Filter predicates as they arrive over the wire (JSON body or query string)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FilterParams {
    #[validate(length(max = 100))]
    #[serde(default)]
    pub search: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(rename = "maxRate", default)]
    pub max_rate: Option<f64>,
}
