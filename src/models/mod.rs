// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CareerDefinition, CareerMatch, ScoringWeights, UserProfile, MAX_RESULTS};
pub use requests::{BatchMatchRequest, MatchCareersRequest, ProfileProgressRequest};
pub use responses::{BatchMatchResponse, CatalogResponse, ErrorResponse, HealthResponse, MatchCareersResponse};
