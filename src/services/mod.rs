// Service exports
pub mod catalog;

pub use catalog::{MentorCatalog, CatalogError};
