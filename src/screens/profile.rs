use crate::models::{Profile, ProfileDetails};

pub fn render_profile(profile: &Profile) -> String {
    let name = profile.full_name.as_deref().unwrap_or(&profile.email);
    let mut lines = vec![
        format!("{} ({})", name, profile.user_type()),
        format!("id: {}", profile.id),
        format!("email: {}", profile.email),
    ];
    match &profile.details {
        ProfileDetails::Founder(founder) => {
            lines.push(format!("startup: {}", founder.startup_name));
            lines.push(format!("industry: {}", founder.industry));
            lines.push(format!("stage: {}", founder.stage));
            lines.push(format!("location: {}", founder.location));
            optional(&mut lines, "funding goal", &founder.funding_goal);
            optional(&mut lines, "website", &founder.website);
            optional(&mut lines, "about", &founder.description);
        }
        ProfileDetails::Investor(investor) => {
            optional(&mut lines, "firm", &investor.firm_name);
            lines.push(format!("industries: {}", investor.industries.join(", ")));
            lines.push(format!("stages: {}", investor.preferred_stages.join(", ")));
            lines.push(format!("location: {}", investor.location));
            optional(&mut lines, "ticket size", &investor.ticket_size);
            optional(&mut lines, "about", &investor.bio);
        }
        ProfileDetails::Incomplete(user_type) => {
            lines.push(format!(
                "Profile not set up yet. Create your {} profile to appear in matches.",
                user_type
            ));
        }
    }
    lines.join("\n")
}

fn optional(lines: &mut Vec<String>, label: &str, value: &Option<String>) {
    if let Some(value) = value {
        lines.push(format!("{}: {}", label, value));
    }
}
