//! Server-ranked match listing.
//!
//! Each entry names its counterpart's role in an explicit `userType` tag.
//! The listing is then checked against the viewer's own role: founders are
//! shown investors, investors are shown startups.

use serde::{Deserialize, Serialize};

use super::user::UserType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorCard {
    pub user_id: String,
    pub full_name: String,
    #[serde(default)]
    pub firm_name: Option<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub ticket_size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupCard {
    pub user_id: String,
    pub full_name: String,
    pub startup_name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "userType")]
pub enum MatchCounterpart {
    #[serde(rename = "INVESTOR")]
    Investor(InvestorCard),
    #[serde(rename = "FOUNDER")]
    Founder(StartupCard),
}

impl MatchCounterpart {
    pub fn user_type(&self) -> UserType {
        match self {
            Self::Investor(_) => UserType::Investor,
            Self::Founder(_) => UserType::Founder,
        }
    }
}

/// One entry of `matches/for-current-user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub score: f64,
    #[serde(default)]
    pub reasons: Vec<String>,
    pub counterpart: MatchCounterpart,
}

/// A card with its score and the server's reasons.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub score: f64,
    pub reasons: Vec<String>,
    pub card: T,
}

/// Matches shaped for the viewer's role, in server rank order.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchView {
    /// Shown to founders.
    Investors(Vec<Ranked<InvestorCard>>),
    /// Shown to investors.
    Startups(Vec<Ranked<StartupCard>>),
}

impl MatchView {
    /// Validate that every entry is of the viewer's counterpart role.
    pub fn for_viewer(viewer: UserType, matches: Vec<Match>) -> Result<Self, String> {
        let expected = viewer.counterpart();
        if let Some(bad) = matches
            .iter()
            .find(|m| m.counterpart.user_type() != expected)
        {
            return Err(format!(
                "expected {} matches for this account, got an entry of type {}",
                expected,
                bad.counterpart.user_type()
            ));
        }

        Ok(match viewer {
            UserType::Founder => Self::Investors(
                matches
                    .into_iter()
                    .filter_map(|m| match m.counterpart {
                        MatchCounterpart::Investor(card) => Some(Ranked {
                            score: m.score,
                            reasons: m.reasons,
                            card,
                        }),
                        MatchCounterpart::Founder(_) => None,
                    })
                    .collect(),
            ),
            UserType::Investor => Self::Startups(
                matches
                    .into_iter()
                    .filter_map(|m| match m.counterpart {
                        MatchCounterpart::Founder(card) => Some(Ranked {
                            score: m.score,
                            reasons: m.reasons,
                            card,
                        }),
                        MatchCounterpart::Investor(_) => None,
                    })
                    .collect(),
            ),
        })
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Investors(items) => items.len(),
            Self::Startups(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
