// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{MentorProfile, StudentPreferences, MatchResult, ScoreBreakdown, ScoringWeights, MAX_RATING};
pub use requests::{ScoreRequest, RankRequest, FilterParams};
pub use responses::{RankResponse, MentorListResponse, HealthResponse, ErrorResponse};
