// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::{matches_search, MentorFilter, MentorPredicate};
pub use matcher::{Matcher, MatchOutcome};
pub use scoring::calculate_match_score;
