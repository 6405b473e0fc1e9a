use crate::models::{BookingRequest, FitWeights, ScoredVehicle, Vehicle};
use crate::core::{filters::has_sufficient_payload, scoring::calculate_fit_score};

/// Number of vehicles returned by a search unless configured otherwise
pub const DEFAULT_RESULT_LIMIT: usize = 3;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<Vehicle>,
    pub total_candidates: usize,
}

/// Ranks fleet vehicles against a requested payload and envelope
///
/// # Pipeline Stages
/// 1. Payload filter (hard requirement)
/// 2. Fit scoring
/// 3. Stable ascending sort by fit score
/// 4. Truncate to the result limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: FitWeights,
    limit: usize,
}

impl Matcher {
    pub fn new(weights: FitWeights, limit: usize) -> Self {
        Self { weights, limit }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: FitWeights::default(),
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    pub fn weights(&self) -> &FitWeights {
        &self.weights
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Find the best-fitting vehicles for a request
    ///
    /// Performs no validation: zero or negative inputs still produce scores.
    ///
    /// # Arguments
    /// * `request` - Payload and envelope the shipment needs
    /// * `candidates` - Snapshot of available vehicles, in encounter order
    ///
    /// # Returns
    /// MatchResult with at most `limit` vehicles, best fit first
    pub fn find_best_fits(
        &self,
        request: &BookingRequest,
        candidates: Vec<Vehicle>,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let matches = self
            .rank(request, candidates)
            .into_iter()
            .map(|scored| scored.vehicle)
            .collect();

        MatchResult {
            matches,
            total_candidates,
        }
    }

    /// Score and rank candidates, keeping the fit score of each
    pub fn rank(&self, request: &BookingRequest, candidates: Vec<Vehicle>) -> Vec<ScoredVehicle> {
        let mut scored: Vec<ScoredVehicle> = candidates
            .into_iter()
            // Stage 1: Payload filter
            .filter(|vehicle| has_sufficient_payload(vehicle, request))
            // Stage 2: Fit scoring
            .map(|vehicle| {
                let fit_score = calculate_fit_score(&vehicle, request, &self.weights);
                ScoredVehicle { vehicle, fit_score }
            })
            .collect();

        // Stage 3: Stable sort, ties keep encounter order. total_cmp never panics on non-finite scores.
        scored.sort_by(|a, b| a.fit_score.total_cmp(&b.fit_score));

        // Stage 4: Limit results
        scored.truncate(self.limit);

        scored
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
