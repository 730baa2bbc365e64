use reqwest::Method;

use super::client::ApiClient;
use super::error::{ApiError, OnFailure};
use crate::models::{Project, ProjectStatus, ProjectStatusUpdate, SupportCheck, SupportRequest};

impl ApiClient {
    /// `POST projects/support`: the current investor backs a founder.
    pub async fn support_founder(&self, founder_id: &str) -> Result<Project, ApiError> {
        let body = SupportRequest {
            founder_id: founder_id.to_string(),
        };
        let builder = self
            .authorized(Method::POST, &["projects", "support"])?
            .json(&body);
        self.execute_json(builder, OnFailure::Fixed("Failed to support project"))
            .await
    }

    /// `GET projects/investor`: projects the current investor supports.
    pub async fn investor_projects(&self) -> Result<Vec<Project>, ApiError> {
        let builder = self.authorized(Method::GET, &["projects", "investor"])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to load supported projects"))
            .await
    }

    /// `GET projects/founder`: investors backing the current founder.
    pub async fn founder_projects(&self) -> Result<Vec<Project>, ApiError> {
        let builder = self.authorized(Method::GET, &["projects", "founder"])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to load supporters"))
            .await
    }

    /// `PUT projects/{id}/status`.
    pub async fn update_project_status(
        &self,
        project_id: &str,
        status: ProjectStatus,
    ) -> Result<Project, ApiError> {
        let builder = self
            .authorized(Method::PUT, &["projects", project_id, "status"])?
            .json(&ProjectStatusUpdate { status });
        self.execute_json(builder, OnFailure::Fixed("Failed to update project status"))
            .await
    }

    /// `GET projects/check/{founderId}`.
    pub async fn check_support(&self, founder_id: &str) -> Result<SupportCheck, ApiError> {
        let builder = self.authorized(Method::GET, &["projects", "check", founder_id])?;
        self.execute_json(builder, OnFailure::Fixed("Failed to check support status"))
            .await
    }
}
