//! Mentor Match - ranking core for the student-mentor marketplace
//!
//! Scores how well each mentor fits a student's stated preferences, ranks
//! mentor lists by that score, and filters them by search term, subject and
//! hourly rate. The HTTP service in `main.rs` exposes the same operations.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Matcher, MatchOutcome, MentorFilter, MentorPredicate};
pub use error::InvalidInputError;
pub use models::{MentorProfile, StudentPreferences, MatchResult, ScoreBreakdown, ScoringWeights};
