use serde::{Deserialize, Serialize};

use super::user::UserRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: UserRef,
    pub post_description: String,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub media_type: Option<MediaKind>,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    #[serde(default)]
    pub shares_count: u64,
    #[serde(default)]
    pub liked_by_current_user: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Post {
    /// Fold a like toggle response into this post.
    pub fn apply_like(&mut self, like: &LikeResponse) {
        if self.id == like.post_id {
            self.liked_by_current_user = like.liked_by_current_user;
            self.likes_count = like.likes_count;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub post_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostComment {
    pub id: String,
    pub post_id: String,
    pub author: UserRef,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentRequest {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub post_id: String,
    pub liked_by_current_user: bool,
    #[serde(default)]
    pub likes_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub post_id: String,
    #[serde(default)]
    pub shares_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInteractions {
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    #[serde(default)]
    pub shares_count: u64,
    #[serde(default)]
    pub liked_by_current_user: bool,
}
