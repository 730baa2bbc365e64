use crate::api::ApiClient;
use crate::lifecycle::{Lifecycle, TriggerOutcome};
use crate::models::{FounderProfile, InvestorProfile, Profile};

/// The signed-in user's profile, other users' profiles, and profile creation.
#[derive(Clone)]
pub struct ProfileContainer {
    api: ApiClient,
    current: Lifecycle<Profile>,
    viewed: Lifecycle<Profile>,
    create: Lifecycle<Profile>,
}

impl ProfileContainer {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            current: Lifecycle::new("profile.current"),
            viewed: Lifecycle::new("profile.viewed"),
            create: Lifecycle::new("profile.create"),
        }
    }

    pub fn current(&self) -> &Lifecycle<Profile> {
        &self.current
    }

    pub fn viewed(&self) -> &Lifecycle<Profile> {
        &self.viewed
    }

    pub fn create(&self) -> &Lifecycle<Profile> {
        &self.create
    }

    pub async fn load_current(&self) -> TriggerOutcome {
        self.current.trigger(self.api.current_profile()).await
    }

    pub async fn load_user(&self, user_id: &str) -> TriggerOutcome {
        self.viewed.trigger(self.api.user_profile(user_id)).await
    }

    /// Create the founder profile, then refetch the current profile.
    pub async fn create_founder_profile(&self, profile: FounderProfile) -> TriggerOutcome {
        let outcome = self
            .create
            .trigger(self.api.create_founder_profile(&profile))
            .await;
        if outcome.is_success() {
            self.refresh_current().await;
        }
        outcome
    }

    /// Create the investor profile, then refetch the current profile.
    pub async fn create_investor_profile(&self, profile: InvestorProfile) -> TriggerOutcome {
        let outcome = self
            .create
            .trigger(self.api.create_investor_profile(&profile))
            .await;
        if outcome.is_success() {
            self.refresh_current().await;
        }
        outcome
    }

    async fn refresh_current(&self) -> TriggerOutcome {
        self.current.refresh(self.api.current_profile()).await
    }

    pub fn reset(&self) {
        self.current.reset();
        self.viewed.reset();
        self.create.reset();
    }
}
