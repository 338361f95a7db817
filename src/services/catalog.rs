use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::MentorFilter;
use crate::error::InvalidInputError;
use crate::models::MentorProfile;

/// Errors that can occur while loading the mentor catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Mentor #{index} ({id}) is invalid: {source}")]
    InvalidMentor {
        index: usize,
        id: String,
        #[source]
        source: InvalidInputError,
    },

    #[error("Duplicate mentor id: {0}")]
    DuplicateId(String),
}

/// In-memory mentor list served to the booking UI
///
/// Loaded once at start-up and never mutated, so it is shared between
/// workers behind an `Arc` without locking. Every mentor is validated on
/// load; a single bad record rejects the whole catalog.
#[derive(Debug, Clone, Default)]
pub struct MentorCatalog {
    mentors: Vec<MentorProfile>,
}

impl MentorCatalog {
    pub fn new(mentors: Vec<MentorProfile>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();

        for (index, mentor) in mentors.iter().enumerate() {
            mentor
                .validate_input()
                .map_err(|source| CatalogError::InvalidMentor {
                    index,
                    id: mentor.id.clone(),
                    source,
                })?;

            if !ids.insert(mentor.id.as_str()) {
                return Err(CatalogError::DuplicateId(mentor.id.clone()));
            }
        }

        Ok(Self { mentors })
    }

    /// Parse a JSON array of mentor profiles
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mentors: Vec<MentorProfile> = serde_json::from_str(json)?;
        Self::new(mentors)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&json)?;
        tracing::info!("Loaded {} mentors from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn mentors(&self) -> &[MentorProfile] {
        &self.mentors
    }

    pub fn get(&self, id: &str) -> Option<&MentorProfile> {
        self.mentors.iter().find(|m| m.id == id)
    }

    /// Mentors passing the filter, in catalog order
    pub fn search(&self, filter: &MentorFilter) -> Vec<&MentorProfile> {
        filter.apply(self.mentors.iter().collect())
    }

    pub fn len(&self) -> usize {
        self.mentors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mentors.is_empty()
    }
}
