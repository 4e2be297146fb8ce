use serde::{Deserialize, Serialize};
use crate::models::domain::{CareerDefinition, CareerMatch};

/// Response for the match endpoint
#[derive(Debug, Clone, Serialize)]
pub struct MatchCareersResponse<'a> {
    pub matches: Vec<CareerMatch<'a>>,
    #[serde(rename = "totalCareers")]
    pub total_careers: usize,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Response for the batch match endpoint, one entry per submitted profile
#[derive(Debug, Clone, Serialize)]
pub struct BatchMatchResponse<'a> {
    pub results: Vec<Vec<CareerMatch<'a>>>,
    #[serde(rename = "totalCareers")]
    pub total_careers: usize,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse<'a> {
    pub careers: &'a [CareerDefinition],
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "catalogSize")]
    pub catalog_size: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
