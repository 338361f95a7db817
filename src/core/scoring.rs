use std::collections::HashSet;

use crate::error::InvalidInputError;
use crate::models::{MentorProfile, ScoreBreakdown, ScoringWeights, StudentPreferences, MAX_RATING};

/// Full marks for a single factor
const FULL: f64 = 100.0;

/// Calculate a match score (0-100) for a mentor against a student's preferences
///
/// Scoring formula (each sub-score on a 0-100 scale):
/// score = round(
///     subject_overlap * 0.35 +     # Share of wanted subjects the mentor teaches
///     grade_match * 0.25 +         # Mentor teaches the student's grade
///     language_overlap * 0.15 +    # Share of acceptable languages spoken
///     duration_match * 0.10 +      # Preferred session length is offered
///     rating * 0.08 +              # rating / 5
///     budget * 0.07                # Full marks within budget, linear falloff above
/// )
///
/// Both profiles and the weight table are validated first; nothing is clamped
/// silently.
pub fn calculate_match_score(
    mentor: &MentorProfile,
    student: &StudentPreferences,
    weights: &ScoringWeights,
) -> Result<ScoreBreakdown, InvalidInputError> {
    mentor.validate_input()?;
    student.validate_input()?;
    weights.validate()?;

    let (subject_overlap, shared_subjects) = overlap_score(&student.subjects, &mentor.subjects);
    let grade_match = grade_score(student.grade, &mentor.grades);
    let (language_overlap, _) = overlap_score(&student.languages, &mentor.languages);
    let duration_match = if mentor
        .session_durations
        .iter()
        .any(|d| d == &student.preferred_session_duration)
    {
        FULL
    } else {
        0.0
    };
    let rating = rating_score(mentor.rating);
    let budget = budget_score(mentor.hourly_rate, student.budget);

    let weighted_total = subject_overlap * weights.subject_overlap
        + grade_match * weights.grade_match
        + language_overlap * weights.language_overlap
        + duration_match * weights.duration_match
        + rating * weights.rating
        + budget * weights.budget;

    // Only reachable with a custom weight table summing above 1.0
    let score = weighted_total.round().clamp(0.0, FULL) as u8;

    Ok(ScoreBreakdown {
        subject_overlap,
        grade_match,
        language_overlap,
        duration_match,
        rating,
        budget,
        weighted_total,
        score,
        shared_subjects,
    })
}

/// Share of `wanted` entries present in `offered` (0-100)
///
/// Duplicates in `wanted` count once. An empty `wanted` scores 0.
fn overlap_score(wanted: &[String], offered: &[String]) -> (f64, Vec<String>) {
    let mut seen = HashSet::new();
    let unique: Vec<&String> = wanted.iter().filter(|w| seen.insert(w.as_str())).collect();

    if unique.is_empty() {
        return (0.0, Vec::new());
    }

    let total = unique.len();
    let shared: Vec<String> = unique
        .into_iter()
        .filter(|w| offered.contains(*w))
        .cloned()
        .collect();

    (shared.len() as f64 / total as f64 * FULL, shared)
}

#[inline]
fn grade_score(grade: Option<u8>, taught: &[u8]) -> f64 {
    match grade {
        None => FULL,
        Some(g) if taught.contains(&g) => FULL,
        Some(_) => 0.0,
    }
}

#[inline]
fn rating_score(rating: f64) -> f64 {
    (rating / MAX_RATING * FULL).clamp(0.0, FULL)
}

/// Budget fit (0-100)
///
/// Falls off linearly with the overshoot relative to the budget and bottoms
/// out at 0 once the rate reaches double the budget.
#[inline]
fn budget_score(hourly_rate: f64, budget: f64) -> f64 {
    if hourly_rate <= budget {
        return FULL;
    }

    let overshoot = (hourly_rate - budget) / budget * FULL;
    (FULL - overshoot).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn create_test_mentor() -> MentorProfile {
        MentorProfile {
            id: "m1".to_string(),
            name: "Dr. Rao".to_string(),
            subjects: strings(&["Physics", "Chemistry"]),
            grades: vec![9, 10, 11, 12],
            languages: strings(&["English"]),
            rating: 4.9,
            hourly_rate: 1500.0,
            session_durations: strings(&["2 hours"]),
            bio: None,
            experience_years: Some(8),
        }
    }

    fn create_test_student() -> StudentPreferences {
        StudentPreferences {
            subjects: strings(&["Physics", "Biology"]),
            grade: Some(10),
            languages: strings(&["English"]),
            preferred_session_duration: "2 hours".to_string(),
            budget: 2000.0,
        }
    }

    #[test]
    fn test_calculate_match_score() {
        let breakdown = calculate_match_score(
            &create_test_mentor(),
            &create_test_student(),
            &ScoringWeights::default(),
        )
        .unwrap();

        assert_eq!(breakdown.subject_overlap, 50.0);
        assert_eq!(breakdown.grade_match, 100.0);
        assert_eq!(breakdown.language_overlap, 100.0);
        assert_eq!(breakdown.duration_match, 100.0);
        assert!((breakdown.rating - 98.0).abs() < 1e-9);
        assert_eq!(breakdown.budget, 100.0);
        assert!((breakdown.weighted_total - 82.34).abs() < 1e-9);
        assert_eq!(breakdown.score, 82);
        assert_eq!(breakdown.shared_subjects, vec!["Physics"]);
    }

    #[test]
    fn test_overlap_score() {
        let (score, shared) = overlap_score(&strings(&["a", "b"]), &strings(&["b", "c"]));
        assert_eq!(score, 50.0);
        assert_eq!(shared, vec!["b"]);

        // Empty wanted set never divides by zero
        let (score, shared) = overlap_score(&[], &strings(&["a"]));
        assert_eq!(score, 0.0);
        assert!(shared.is_empty());

        // Duplicates count once
        let (score, _) = overlap_score(&strings(&["a", "a", "b"]), &strings(&["a"]));
        assert_eq!(score, 50.0);
    }

    #[test]
    fn test_grade_score() {
        assert_eq!(grade_score(Some(10), &[9, 10]), 100.0);
        assert_eq!(grade_score(Some(8), &[9, 10]), 0.0);
        assert_eq!(grade_score(None, &[]), 100.0);
    }

    #[test]
    fn test_rating_score() {
        assert_eq!(rating_score(5.0), 100.0);
        assert_eq!(rating_score(0.0), 0.0);
        assert_eq!(rating_score(2.5), 50.0);
    }

    #[test]
    fn test_budget_score() {
        // Within budget
        assert_eq!(budget_score(1500.0, 2000.0), 100.0);
        assert_eq!(budget_score(2000.0, 2000.0), 100.0);

        // 25% over budget
        assert_eq!(budget_score(1250.0, 1000.0), 75.0);

        // Exactly double the budget
        assert_eq!(budget_score(2000.0, 1000.0), 0.0);

        // Far above budget floors at zero
        assert_eq!(budget_score(100_000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_rejects_invalid_input() {
        let mut mentor = create_test_mentor();
        mentor.rating = 6.0;
        let err = calculate_match_score(&mentor, &create_test_student(), &ScoringWeights::default())
            .unwrap_err();
        assert_eq!(err.entity, "mentor");

        let mut student = create_test_student();
        student.budget = -5.0;
        let err = calculate_match_score(&create_test_mentor(), &student, &ScoringWeights::default())
            .unwrap_err();
        assert_eq!(err.field, "budget");
    }

    #[test]
    fn test_oversized_weights_are_clamped() {
        let weights = ScoringWeights {
            subject_overlap: 1.0,
            grade_match: 1.0,
            language_overlap: 1.0,
            duration_match: 1.0,
            rating: 1.0,
            budget: 1.0,
        };
        let mut mentor = create_test_mentor();
        mentor.rating = 5.0;
        mentor.subjects.push("Biology".to_string());

        let breakdown = calculate_match_score(&mentor, &create_test_student(), &weights).unwrap();
        assert_eq!(breakdown.score, 100);
    }
}
