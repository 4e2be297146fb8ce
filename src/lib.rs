//! Career Match - rule-based career matching for career guidance onboarding
//!
//! This library scores a user profile against a fixed catalog of careers and
//! returns the best few fits with human-readable reasons. The scoring is a
//! deterministic weighted sum over case-insensitive substring checks.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError};
pub use self::core::{match_careers, profile_progress, Matcher, ProfileProgress};
pub use models::{CareerDefinition, CareerMatch, ScoringWeights, UserProfile};
