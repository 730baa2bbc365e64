use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role. Drives which profile payload and which matches apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    #[serde(rename = "FOUNDER", alias = "founder", alias = "Founder")]
    Founder,
    #[serde(rename = "INVESTOR", alias = "investor", alias = "Investor")]
    Investor,
}

impl UserType {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Founder => "FOUNDER",
            Self::Investor => "INVESTOR",
        }
    }

    /// The role this user is matched against.
    pub fn counterpart(&self) -> Self {
        match self {
            Self::Founder => Self::Investor,
            Self::Investor => Self::Founder,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Founder => write!(f, "founder"),
            Self::Investor => write!(f, "investor"),
        }
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "founder" => Ok(Self::Founder),
            "investor" => Ok(Self::Investor),
            other => Err(format!(
                "unknown user type '{}', expected 'founder' or 'investor'",
                other
            )),
        }
    }
}

/// Minimal reference to another user, embedded in posts, connections and projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub user_type: Option<UserType>,
}

/// One hit from user search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub full_name: String,
    pub user_type: UserType,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Discovery search filters. Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.user_type.is_none()
            && self.industry.is_none()
            && self.location.is_none()
            && self.stage.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_type_accepts_wire_and_lowercase() {
        let upper: UserType = serde_json::from_str("\"FOUNDER\"").unwrap();
        let lower: UserType = serde_json::from_str("\"investor\"").unwrap();
        assert_eq!(upper, UserType::Founder);
        assert_eq!(lower, UserType::Investor);
        assert_eq!(
            serde_json::to_string(&UserType::Investor).unwrap(),
            "\"INVESTOR\""
        );
    }

    #[test]
    fn user_type_from_str() {
        assert_eq!("Founder".parse::<UserType>(), Ok(UserType::Founder));
        assert!("angel".parse::<UserType>().is_err());
    }

    #[test]
    fn counterpart_flips_role() {
        assert_eq!(UserType::Founder.counterpart(), UserType::Investor);
        assert_eq!(UserType::Investor.counterpart(), UserType::Founder);
    }

    #[test]
    fn empty_filters_serialize_to_nothing() {
        let json = serde_json::to_value(SearchFilters::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
        assert!(SearchFilters::default().is_empty());
    }
}
