use crate::models::{Connection, Project, SupportCheck, UserType};

/// Connections seen from `me`: the other side, status and id.
pub fn render_connections(connections: &[Connection], me: Option<&str>) -> String {
    if connections.is_empty() {
        return "No connections.".to_string();
    }
    connections
        .iter()
        .map(|c| {
            let peer = match me {
                Some(me) => c.peer_of(me),
                None => &c.requester,
            };
            format!("[{}] {} ({})", c.id, peer.name, c.status)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Projects seen from `viewer`: investors see founders, founders see investors.
pub fn render_projects(projects: &[Project], viewer: UserType) -> String {
    if projects.is_empty() {
        return match viewer {
            UserType::Investor => "You are not supporting any startups yet.".to_string(),
            UserType::Founder => "No investors are supporting you yet.".to_string(),
        };
    }
    projects
        .iter()
        .map(|p| {
            let other = match viewer {
                UserType::Investor => &p.founder,
                UserType::Founder => &p.investor,
            };
            match &p.startup_name {
                Some(startup) => format!("[{}] {} - {} ({})", p.id, startup, other.name, p.status),
                None => format!("[{}] {} ({})", p.id, other.name, p.status),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_support_check(check: &SupportCheck) -> String {
    match (check.supported, &check.project_id) {
        (true, Some(id)) => format!("Supported (project {})", id),
        (true, None) => "Supported".to_string(),
        (false, _) => "Not supported".to_string(),
    }
}
