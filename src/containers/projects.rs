use crate::api::ApiClient;
use crate::lifecycle::{Lifecycle, TriggerOutcome};
use crate::models::{Project, ProjectStatus, SupportCheck};

/// Investor support for founders.
///
/// `supported` is the investor's view (founders they back), `supporters`
/// the founder's view (investors backing them).
#[derive(Clone)]
pub struct ProjectsContainer {
    api: ApiClient,
    supported: Lifecycle<Vec<Project>>,
    supporters: Lifecycle<Vec<Project>>,
    support: Lifecycle<Project>,
    check: Lifecycle<SupportCheck>,
    status: Lifecycle<Project>,
}

impl ProjectsContainer {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            supported: Lifecycle::new("projects.supported"),
            supporters: Lifecycle::new("projects.supporters"),
            support: Lifecycle::new("projects.support"),
            check: Lifecycle::new("projects.check"),
            status: Lifecycle::new("projects.status"),
        }
    }

    pub fn supported(&self) -> &Lifecycle<Vec<Project>> {
        &self.supported
    }

    pub fn supporters(&self) -> &Lifecycle<Vec<Project>> {
        &self.supporters
    }

    pub fn support_request(&self) -> &Lifecycle<Project> {
        &self.support
    }

    pub fn check(&self) -> &Lifecycle<SupportCheck> {
        &self.check
    }

    pub fn status(&self) -> &Lifecycle<Project> {
        &self.status
    }

    pub async fn load_supported(&self) -> TriggerOutcome {
        self.supported.trigger(self.api.investor_projects()).await
    }

    pub async fn load_supporters(&self) -> TriggerOutcome {
        self.supporters.trigger(self.api.founder_projects()).await
    }

    /// Back `founder_id`, then refresh the supported list and the support flag.
    pub async fn support(&self, founder_id: &str) -> TriggerOutcome {
        let outcome = self
            .support
            .trigger(self.api.support_founder(founder_id))
            .await;
        if outcome.is_success() {
            self.supported.refresh(self.api.investor_projects()).await;
            self.check.refresh(self.api.check_support(founder_id)).await;
        }
        outcome
    }

    pub async fn check_support(&self, founder_id: &str) -> TriggerOutcome {
        self.check.trigger(self.api.check_support(founder_id)).await
    }

    /// Move a project to `status` and fold the result into loaded lists.
    pub async fn update_status(&self, project_id: &str, status: ProjectStatus) -> TriggerOutcome {
        self.status
            .trigger_then(
                self.api.update_project_status(project_id, status),
                |updated| {
                    for list in [&self.supported, &self.supporters] {
                        list.patch(|projects| {
                            for project in projects.iter_mut().filter(|p| p.id == updated.id) {
                                *project = updated.clone();
                            }
                        });
                    }
                },
            )
            .await
    }

    pub fn reset(&self) {
        self.supported.reset();
        self.supporters.reset();
        self.support.reset();
        self.check.reset();
        self.status.reset();
    }
}
