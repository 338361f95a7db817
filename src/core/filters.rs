use crate::error::InvalidInputError;
use crate::models::{FilterParams, MentorProfile};

/// A single filter predicate over mentor profiles
#[derive(Debug, Clone, PartialEq)]
pub enum MentorPredicate {
    /// Case-insensitive substring match against the name or any subject
    Search(String),
    /// Mentor teaches exactly this subject
    Subject(String),
    /// Hourly rate at or below the limit
    MaxHourlyRate(f64),
}

impl MentorPredicate {
    #[inline]
    pub fn matches(&self, mentor: &MentorProfile) -> bool {
        match self {
            MentorPredicate::Search(term) => matches_search(mentor, term),
            MentorPredicate::Subject(subject) => mentor.teaches(subject),
            MentorPredicate::MaxHourlyRate(max) => mentor.hourly_rate <= *max,
        }
    }
}

/// Check if a mentor matches a free-text search term
///
/// A blank term matches every mentor. Otherwise the term is matched as is,
/// surrounding whitespace included.
#[inline]
pub fn matches_search(mentor: &MentorProfile, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    let needle = term.to_lowercase();

    mentor.name.to_lowercase().contains(&needle)
        || mentor
            .subjects
            .iter()
            .any(|s| s.to_lowercase().contains(&needle))
}

/// Set of predicates combined with AND
///
/// Filtering only removes elements; survivors keep their relative order, so
/// the same filter can run before or after ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MentorFilter {
    predicates: Vec<MentorPredicate>,
}

impl MentorFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.predicates.push(MentorPredicate::Search(term.into()));
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.predicates.push(MentorPredicate::Subject(subject.into()));
        self
    }

    pub fn max_hourly_rate(mut self, max: f64) -> Result<Self, InvalidInputError> {
        if !max.is_finite() || max < 0.0 {
            return Err(InvalidInputError::new(
                "filter",
                "maxRate",
                format!("must be a finite non-negative number, got {}", max),
            ));
        }
        self.predicates.push(MentorPredicate::MaxHourlyRate(max));
        Ok(self)
    }

    pub fn predicates(&self) -> &[MentorPredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    #[inline]
    pub fn matches(&self, mentor: &MentorProfile) -> bool {
        self.predicates.iter().all(|p| p.matches(mentor))
    }

    /// Keep the items whose mentor passes every predicate
    ///
    /// Works on plain profiles, references, or ranked results.
    pub fn apply<T: AsRef<MentorProfile>>(&self, mut items: Vec<T>) -> Vec<T> {
        items.retain(|item| self.matches(item.as_ref()));
        items
    }
}

impl TryFrom<&FilterParams> for MentorFilter {
    type Error = InvalidInputError;

    fn try_from(params: &FilterParams) -> Result<Self, Self::Error> {
        let mut filter = MentorFilter::new();

        if let Some(search) = params.search.as_deref().filter(|s| !s.trim().is_empty()) {
            filter = filter.search(search);
        }
        if let Some(subject) = &params.subject {
            filter = filter.subject(subject.clone());
        }
        if let Some(max) = params.max_rate {
            filter = filter.max_hourly_rate(max)?;
        }

        Ok(filter)
    }
}
