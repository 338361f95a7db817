use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, InvalidInputError};

/// Highest rating a mentor can hold
pub const MAX_RATING: f64 = 5.0;

/// Mentor profile as listed in the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorProfile {
    /// Caller-assigned identifier
    pub id: String,
    pub name: String,
    pub subjects: Vec<String>,
    #[serde(default)]
    pub grades: Vec<u8>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub rating: f64,
    #[serde(rename = "hourlyRate")]
    pub hourly_rate: f64,
    #[serde(rename = "sessionDurations", default)]
    pub session_durations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "experienceYears", default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u8>,
}

impl MentorProfile {
    /// Check the range constraints scoring depends on
    pub fn validate_input(&self) -> Result<(), InvalidInputError> {
        if self.subjects.is_empty() {
            return Err(InvalidInputError::new("mentor", "subjects", "must list at least one subject"));
        }
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(InvalidInputError::new(
                "mentor",
                "rating",
                format!("must be within [0, {}], got {}", MAX_RATING, self.rating),
            ));
        }
        ensure_positive("mentor", "hourlyRate", self.hourly_rate)
    }

    pub fn teaches(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }
}

impl AsRef<MentorProfile> for MentorProfile {
    fn as_ref(&self) -> &MentorProfile {
        self
    }
}

/// What a student is looking for in a mentor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentPreferences {
    #[serde(default)]
    pub subjects: Vec<String>,
    /// `None` means no grade preference: every mentor counts as a grade match
    #[serde(default)]
    pub grade: Option<u8>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(rename = "preferredSessionDuration")]
    pub preferred_session_duration: String,
    pub budget: f64,
}

impl StudentPreferences {
    pub fn validate_input(&self) -> Result<(), InvalidInputError> {
        ensure_positive("student", "budget", self.budget)
    }
}

/// Mentor paired with its compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub mentor: &'a MentorProfile,
    pub score: u8,
}

impl AsRef<MentorProfile> for MatchResult<'_> {
    fn as_ref(&self) -> &MentorProfile {
        self.mentor
    }
}

/// Per-factor view of a score, each sub-score on a 0-100 scale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "subjectOverlap")]
    pub subject_overlap: f64,
    #[serde(rename = "gradeMatch")]
    pub grade_match: f64,
    #[serde(rename = "languageOverlap")]
    pub language_overlap: f64,
    #[serde(rename = "durationMatch")]
    pub duration_match: f64,
    pub rating: f64,
    pub budget: f64,
    /// Weighted sum before rounding
    #[serde(rename = "weightedTotal")]
    pub weighted_total: f64,
    pub score: u8,
    #[serde(rename = "sharedSubjects")]
    pub shared_subjects: Vec<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(rename = "subjectOverlap")]
    pub subject_overlap: f64,
    #[serde(rename = "gradeMatch")]
    pub grade_match: f64,
    #[serde(rename = "languageOverlap")]
    pub language_overlap: f64,
    #[serde(rename = "durationMatch")]
    pub duration_match: f64,
    pub rating: f64,
    pub budget: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.subject_overlap
            + self.grade_match
            + self.language_overlap
            + self.duration_match
            + self.rating
            + self.budget
    }

    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let fields = [
            ("subjectOverlap", self.subject_overlap),
            ("gradeMatch", self.grade_match),
            ("languageOverlap", self.language_overlap),
            ("durationMatch", self.duration_match),
            ("rating", self.rating),
            ("budget", self.budget),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidInputError::new(
                    "weights",
                    field,
                    format!("must be a finite non-negative number, got {}", value),
                ));
            }
        }

        if self.sum() <= 0.0 {
            return Err(InvalidInputError::new("weights", "sum", "at least one weight must be positive"));
        }

        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            subject_overlap: 0.35,
            grade_match: 0.25,
            language_overlap: 0.15,
            duration_match: 0.10,
            rating: 0.08,
            budget: 0.07,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mentor() -> MentorProfile {
        MentorProfile {
            id: "m1".to_string(),
            name: "Ada".to_string(),
            subjects: vec!["Physics".to_string()],
            grades: vec![10],
            languages: vec!["English".to_string()],
            rating: 4.5,
            hourly_rate: 1200.0,
            session_durations: vec!["1 hour".to_string()],
            bio: None,
            experience_years: None,
        }
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let sum = ScoringWeights::default().sum();
        assert!((sum - 1.0).abs() < 1e-9, "weights sum to {}", sum);
    }

    #[test]
    fn test_weights_reject_negative() {
        let weights = ScoringWeights {
            rating: -0.1,
            ..ScoringWeights::default()
        };
        let err = weights.validate().unwrap_err();
        assert_eq!(err.field, "rating");
    }

    #[test]
    fn test_weights_reject_all_zero() {
        let weights = ScoringWeights {
            subject_overlap: 0.0,
            grade_match: 0.0,
            language_overlap: 0.0,
            duration_match: 0.0,
            rating: 0.0,
            budget: 0.0,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_mentor_validation() {
        assert!(mentor().validate_input().is_ok());

        let mut bad = mentor();
        bad.rating = 5.1;
        assert_eq!(bad.validate_input().unwrap_err().field, "rating");

        let mut bad = mentor();
        bad.hourly_rate = -10.0;
        assert_eq!(bad.validate_input().unwrap_err().field, "hourlyRate");

        let mut bad = mentor();
        bad.subjects.clear();
        assert_eq!(bad.validate_input().unwrap_err().field, "subjects");
    }

    #[test]
    fn test_mentor_deserializes_camel_case() {
        let json = r#"{
            "id": "ada",
            "name": "Ada",
            "subjects": ["Physics"],
            "grades": [9, 10],
            "languages": ["English"],
            "rating": 4.9,
            "hourlyRate": 1500,
            "sessionDurations": ["2 hours"]
        }"#;

        let mentor: MentorProfile = serde_json::from_str(json).unwrap();
        assert_eq!(mentor.hourly_rate, 1500.0);
        assert_eq!(mentor.session_durations, vec!["2 hours"]);
        assert_eq!(mentor.id, "ada");
    }

    #[test]
    fn test_mentor_id_is_required() {
        let json = r#"{
            "name": "Ada",
            "subjects": ["Physics"],
            "rating": 4.9,
            "hourlyRate": 1500
        }"#;

        let err = serde_json::from_str::<MentorProfile>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `id`"));
    }

    #[test]
    fn test_student_grade_is_optional() {
        let json = r#"{
            "subjects": ["Physics"],
            "languages": ["English"],
            "preferredSessionDuration": "1 hour",
            "budget": 1000
        }"#;

        let student: StudentPreferences = serde_json::from_str(json).unwrap();
        assert_eq!(student.grade, None);
        assert!(student.validate_input().is_ok());
    }

    #[test]
    fn test_grade_must_be_integer() {
        let json = r#"{
            "subjects": [],
            "grade": 10.5,
            "preferredSessionDuration": "1 hour",
            "budget": 1000
        }"#;

        assert!(serde_json::from_str::<StudentPreferences>(json).is_err());
    }
}
