use reqwest::Method;

use super::client::ApiClient;
use super::error::{ApiError, OnFailure};
use crate::models::{FounderProfile, InvestorProfile, Profile, SearchFilters, UserSummary};

impl ApiClient {
    /// `GET users/profile`: the signed-in user.
    pub async fn current_profile(&self) -> Result<Profile, ApiError> {
        let builder = self.authorized(Method::GET, &["users", "profile"])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to load profile"))
            .await
    }

    /// `GET users/{id}`.
    pub async fn user_profile(&self, user_id: &str) -> Result<Profile, ApiError> {
        let builder = self.authorized(Method::GET, &["users", user_id])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to load user profile"))
            .await
    }

    /// `POST users/founder-profile`.
    pub async fn create_founder_profile(
        &self,
        profile: &FounderProfile,
    ) -> Result<Profile, ApiError> {
        let builder = self
            .authorized(Method::POST, &["users", "founder-profile"])?
            .json(profile);
        self.execute_json(builder, OnFailure::Fixed("Failed to create founder profile"))
            .await
    }

    /// `POST users/investor-profile`.
    pub async fn create_investor_profile(
        &self,
        profile: &InvestorProfile,
    ) -> Result<Profile, ApiError> {
        let builder = self
            .authorized(Method::POST, &["users", "investor-profile"])?
            .json(profile);
        self.execute_json(builder, OnFailure::Fixed("Failed to create investor profile"))
            .await
    }

    /// `GET users/search` with the set filters as query parameters.
    pub async fn search_users(&self, filters: &SearchFilters) -> Result<Vec<UserSummary>, ApiError> {
        let builder = self
            .authorized(Method::GET, &["users", "search"])?
            .query(filters);
        self.execute_json(builder, OnFailure::Fixed("Search failed"))
            .await
    }

    /// `GET users/search-messages?query=`: recipients for sharing and messaging.
    pub async fn search_message_recipients(
        &self,
        query: &str,
    ) -> Result<Vec<UserSummary>, ApiError> {
        let builder = self
            .authorized(Method::GET, &["users", "search-messages"])?
            .query(&[("query", query)]);
        self.execute_json(builder, OnFailure::Fixed("Failed to search users"))
            .await
    }
}
