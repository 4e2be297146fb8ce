use crate::models::{CareerDefinition, CareerMatch, ScoringWeights, UserProfile, MAX_RESULTS};
use crate::core::scoring::{score_career, NormalizedProfile};

/// Main matching orchestrator - scores a profile against every career
///
/// # Pipeline Stages
/// 1. Profile normalization (once per call)
/// 2. Per-career scoring
/// 3. Zero-score filtering
/// 4. Stable ranking and truncation
///
/// The matcher holds only its weights, so one instance can be shared freely
/// between request handlers.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank the careers that fit a profile
    ///
    /// # Arguments
    /// * `profile` - The user's profile; absent fields count as empty
    /// * `catalog` - Careers to score, in catalog order
    ///
    /// # Returns
    /// At most `max_results` (never more than `MAX_RESULTS`) matches with a
    /// positive score, highest first.
    /// Equal scores keep catalog order. An empty list means no confident match.
    pub fn find_matches<'c>(
        &self,
        profile: &UserProfile,
        catalog: &'c [CareerDefinition],
    ) -> Vec<CareerMatch<'c>> {
        let normalized = NormalizedProfile::new(profile);

        let mut matches: Vec<CareerMatch<'c>> = catalog
            .iter()
            .filter_map(|career| {
                let (score, reasons) = score_career(&normalized, career, &self.weights);

                if score > 0 {
                    Some(CareerMatch {
                        career,
                        score,
                        reasons,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable: ties keep catalog order
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(self.weights.max_results.min(MAX_RESULTS));

        tracing::trace!(
            "Matched {} of {} careers",
            matches.len(),
            catalog.len()
        );

        matches
    }

    /// Rank careers for several profiles, one result list per profile in input order
    pub fn find_matches_batch<'c>(
        &self,
        profiles: &[UserProfile],
        catalog: &'c [CareerDefinition],
    ) -> Vec<Vec<CareerMatch<'c>>> {
        profiles
            .iter()
            .map(|profile| self.find_matches(profile, catalog))
            .collect()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank careers for a profile using the default weights
pub fn match_careers<'c>(
    profile: &UserProfile,
    catalog: &'c [CareerDefinition],
) -> Vec<CareerMatch<'c>> {
    Matcher::with_default_weights().find_matches(profile, catalog)
}
