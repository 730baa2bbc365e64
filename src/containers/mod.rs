//! Per-feature state containers.
//!
//! Each container owns one [`Lifecycle`](crate::lifecycle::Lifecycle) slot
//! per remote operation and the rules for refreshing read-side slots after
//! a successful mutation. Containers share nothing except the session store
//! reached through the injected [`ApiClient`].

mod auth;
mod connections;
mod discovery;
mod messages;
mod posts;
mod profile;
mod projects;

pub use auth::AuthContainer;
pub use connections::ConnectionsContainer;
pub use discovery::DiscoveryContainer;
pub use messages::MessagesContainer;
pub use posts::PostsContainer;
pub use profile::ProfileContainer;
pub use projects::ProjectsContainer;

use crate::api::ApiClient;
use crate::config::Config;

/// Every container, wired to one client.
#[derive(Clone)]
pub struct Containers {
    pub auth: AuthContainer,
    pub profile: ProfileContainer,
    pub posts: PostsContainer,
    pub messages: MessagesContainer,
    pub connections: ConnectionsContainer,
    pub projects: ProjectsContainer,
    pub discovery: DiscoveryContainer,
}

impl Containers {
    pub fn new(api: ApiClient, config: &Config) -> Self {
        Self {
            auth: AuthContainer::new(api.clone()),
            profile: ProfileContainer::new(api.clone()),
            posts: PostsContainer::new(api.clone()),
            messages: MessagesContainer::new(api.clone()),
            connections: ConnectionsContainer::new(api.clone()),
            projects: ProjectsContainer::new(api.clone()),
            discovery: DiscoveryContainer::new(api, config.matches.default_limit),
        }
    }
}
