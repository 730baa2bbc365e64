use reqwest::Method;

use super::client::ApiClient;
use super::error::{ApiError, OnFailure};
use crate::models::Match;

impl ApiClient {
    /// `GET matches/for-current-user?limit=`, in server rank order.
    pub async fn matches_for_current_user(&self, limit: u32) -> Result<Vec<Match>, ApiError> {
        let builder = self
            .authorized(Method::GET, &["matches", "for-current-user"])?
            .query(&[("limit", limit)]);
        self.execute_json(builder, OnFailure::Fixed("Failed to load matches"))
            .await
    }
}
