use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::UserProfile;

/// Request to match one profile against the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCareersRequest {
    #[serde(default)]
    pub profile: UserProfile,
}

/// Request to match several profiles in one call
///
/// The upper bound comes from `limits.max_batch_size` and is checked by the handler.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BatchMatchRequest {
    #[validate(length(min = 1))]
    pub profiles: Vec<UserProfile>,
}

/// Request to compute onboarding progress for a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileProgressRequest {
    #[serde(default)]
    pub profile: UserProfile,
}
