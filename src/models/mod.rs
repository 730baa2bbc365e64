//! Records mirroring the backend's JSON shapes.
//!
//! Field names are camelCase on the wire. Identifiers are opaque strings.
//! Polymorphic payloads (profiles, matches) are decoded strictly into
//! tagged enums here, at the API boundary, so consumers match
//! exhaustively instead of probing optional fields.

mod auth;
mod connection;
mod matches;
mod message;
mod post;
mod profile;
mod project;
mod user;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use connection::{Connection, ConnectionRequest, ConnectionStatus, ConnectionUpdate};
pub use matches::{InvestorCard, Match, MatchCounterpart, MatchView, Ranked, StartupCard};
pub use message::{ConversationSummary, Message, SendMessageRequest};
pub use post::{
    CommentRequest, CreatePostRequest, LikeResponse, MediaKind, Post, PostComment,
    PostInteractions, ShareResponse,
};
pub use profile::{FounderProfile, InvestorProfile, Profile, ProfileDetails};
pub use project::{Project, ProjectStatus, ProjectStatusUpdate, SupportCheck, SupportRequest};
pub use user::{SearchFilters, UserRef, UserSummary, UserType};
