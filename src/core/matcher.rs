use crate::core::{filters::MentorFilter, scoring::calculate_match_score};
use crate::error::InvalidInputError;
use crate::models::{MatchResult, MentorProfile, ScoreBreakdown, ScoringWeights, StudentPreferences};

/// Result of the matching pipeline
#[derive(Debug)]
pub struct MatchOutcome<'a> {
    pub matches: Vec<MatchResult<'a>>,
    pub total_candidates: usize,
}

/// Scores and ranks mentors for a student
///
/// Holds nothing but the weight table, so one instance can be shared freely
/// across threads.
///
/// # Pipeline Stages
/// 1. Filter predicates
/// 2. Scoring
/// 3. Stable ranking by descending score
/// 4. Limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Result<Self, InvalidInputError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Compatibility score (0-100) of one mentor for one student
    pub fn score(
        &self,
        mentor: &MentorProfile,
        student: &StudentPreferences,
    ) -> Result<u8, InvalidInputError> {
        Ok(self.score_breakdown(mentor, student)?.score)
    }

    /// Same as [`Matcher::score`] with every sub-score exposed
    pub fn score_breakdown(
        &self,
        mentor: &MentorProfile,
        student: &StudentPreferences,
    ) -> Result<ScoreBreakdown, InvalidInputError> {
        calculate_match_score(mentor, student, &self.weights)
    }

    /// Score every mentor and sort by descending score
    ///
    /// Ties keep their input order. A single invalid mentor fails the whole
    /// call rather than being dropped. The student is checked even when
    /// there is nothing to rank.
    pub fn rank<'a, I>(
        &self,
        mentors: I,
        student: &StudentPreferences,
    ) -> Result<Vec<MatchResult<'a>>, InvalidInputError>
    where
        I: IntoIterator<Item = &'a MentorProfile>,
    {
        student.validate_input()?;

        let mut ranked = mentors
            .into_iter()
            .map(|mentor| {
                self.score(mentor, student)
                    .map(|score| MatchResult { mentor, score })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // sort_by is stable
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        Ok(ranked)
    }

    /// Filter, rank and truncate a candidate list
    ///
    /// # Arguments
    /// * `student` - The student's preferences
    /// * `mentors` - Candidate mentors, in display order
    /// * `filter` - Predicates a mentor must pass to be ranked
    /// * `limit` - Maximum number of matches to return
    pub fn find_matches<'a>(
        &self,
        student: &StudentPreferences,
        mentors: &'a [MentorProfile],
        filter: &MentorFilter,
        limit: usize,
    ) -> Result<MatchOutcome<'a>, InvalidInputError> {
        let total_candidates = mentors.len();

        let candidates = filter.apply(mentors.iter().collect());
        tracing::debug!(
            "{} of {} mentors passed filters",
            candidates.len(),
            total_candidates
        );

        let mut matches = self.rank(candidates, student)?;
        matches.truncate(limit);

        Ok(MatchOutcome {
            matches,
            total_candidates,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
