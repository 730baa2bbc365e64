use serde::{Deserialize, Serialize};

use super::user::UserType;

/// Startup fields carried by founder accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FounderProfile {
    pub startup_name: String,
    pub industry: String,
    pub location: String,
    pub stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Firm fields carried by investor accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firm_name: Option<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    pub location: String,
    #[serde(default)]
    pub preferred_stages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Role-specific part of a profile.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileDetails {
    Founder(FounderProfile),
    Investor(InvestorProfile),
    /// Account exists but the role profile has not been created yet.
    Incomplete(UserType),
}

impl ProfileDetails {
    pub fn user_type(&self) -> UserType {
        match self {
            Self::Founder(_) => UserType::Founder,
            Self::Investor(_) => UserType::Investor,
            Self::Incomplete(user_type) => *user_type,
        }
    }
}

/// A user as returned by `users/profile` and `users/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileWire", into = "ProfileWire")]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub details: ProfileDetails,
}

impl Profile {
    pub fn user_type(&self) -> UserType {
        self.details.user_type()
    }

    pub fn is_complete(&self) -> bool {
        !matches!(self.details, ProfileDetails::Incomplete(_))
    }
}

/// Loosely-typed wire shape: both payloads optional, keyed by `userType`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileWire {
    id: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
    user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    founder_profile: Option<FounderProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    investor_profile: Option<InvestorProfile>,
}

impl TryFrom<ProfileWire> for Profile {
    type Error = String;

    fn try_from(wire: ProfileWire) -> Result<Self, Self::Error> {
        let details = match (wire.user_type, wire.founder_profile, wire.investor_profile) {
            (UserType::Founder, Some(founder), None) => ProfileDetails::Founder(founder),
            (UserType::Investor, None, Some(investor)) => ProfileDetails::Investor(investor),
            (user_type, None, None) => ProfileDetails::Incomplete(user_type),
            (user_type, _, _) => {
                return Err(format!(
                    "profile payload does not match user type {}",
                    user_type.as_str()
                ))
            }
        };

        Ok(Self {
            id: wire.id,
            email: wire.email,
            full_name: wire.full_name,
            details,
        })
    }
}

impl From<Profile> for ProfileWire {
    fn from(profile: Profile) -> Self {
        let user_type = profile.user_type();
        let (founder_profile, investor_profile) = match profile.details {
            ProfileDetails::Founder(founder) => (Some(founder), None),
            ProfileDetails::Investor(investor) => (None, Some(investor)),
            ProfileDetails::Incomplete(_) => (None, None),
        };
        Self {
            id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
            user_type,
            founder_profile,
            investor_profile,
        }
    }
}
