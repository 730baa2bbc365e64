use crate::api::{ApiClient, ApiError};
use crate::lifecycle::{Lifecycle, TriggerOutcome, TriggerPolicy};
use crate::models::{MatchView, SearchFilters, UserSummary};

/// Filtered user search and ranked matches.
#[derive(Clone)]
pub struct DiscoveryContainer {
    api: ApiClient,
    default_match_limit: u32,
    results: Lifecycle<Vec<UserSummary>>,
    matches: Lifecycle<MatchView>,
}

impl DiscoveryContainer {
    pub fn new(api: ApiClient, default_match_limit: u32) -> Self {
        Self {
            api,
            default_match_limit,
            // Keyed by the filter set: a newer search replaces an older one.
            results: Lifecycle::with_policy("discovery.results", TriggerPolicy::Supersede),
            matches: Lifecycle::new("discovery.matches"),
        }
    }

    pub fn results(&self) -> &Lifecycle<Vec<UserSummary>> {
        &self.results
    }

    pub fn matches(&self) -> &Lifecycle<MatchView> {
        &self.matches
    }

    pub async fn search(&self, filters: SearchFilters) -> TriggerOutcome {
        let api = &self.api;
        self.results
            .trigger(async move { api.search_users(&filters).await })
            .await
    }

    /// Ranked counterparts for the signed-in user: investors for a founder,
    /// startups for an investor.
    pub async fn load_matches(&self, limit: Option<u32>) -> TriggerOutcome {
        let limit = limit.unwrap_or(self.default_match_limit);
        let api = &self.api;
        self.matches
            .trigger(async move {
                let session = api.session();
                if !session.is_logged_in() {
                    return Err(ApiError::AuthenticationMissing);
                }
                let viewer = session.user_type().ok_or_else(|| {
                    ApiError::InvalidInput(
                        "Account type unknown. Please sign in again.".to_string(),
                    )
                })?;
                let matches = api.matches_for_current_user(limit).await?;
                MatchView::for_viewer(viewer, matches).map_err(ApiError::Decode)
            })
            .await
    }

    pub fn reset(&self) {
        self.results.reset();
        self.matches.reset();
    }
}
