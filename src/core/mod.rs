// Core algorithm exports
pub mod matcher;
pub mod progress;
pub mod scoring;
pub mod text;

pub use matcher::{match_careers, Matcher};
pub use progress::{profile_progress, ProfileField, ProfileProgress};
pub use scoring::{score_career, NormalizedProfile};
