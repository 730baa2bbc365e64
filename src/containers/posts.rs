use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::watch;

use crate::api::{ApiClient, ApiError};
use crate::lifecycle::{Lifecycle, TriggerOutcome};
use crate::models::{
    CreatePostRequest, LikeResponse, Post, PostComment, PostInteractions, ShareResponse,
};

/// Feed, post detail, and post interactions.
///
/// Alongside the request slots the container keeps the set of post ids the
/// current user has liked. The set is rebuilt from every successful feed
/// load and updated by [`toggle_like`](Self::toggle_like), which also folds
/// the new like count into any loaded list or detail holding that post.
#[derive(Clone)]
pub struct PostsContainer {
    api: ApiClient,
    feed: Lifecycle<Vec<Post>>,
    my_posts: Lifecycle<Vec<Post>>,
    user_posts: Lifecycle<Vec<Post>>,
    detail: Lifecycle<Post>,
    create: Lifecycle<Post>,
    like: Lifecycle<LikeResponse>,
    comments: Lifecycle<Vec<PostComment>>,
    comment: Lifecycle<PostComment>,
    share: Lifecycle<ShareResponse>,
    interactions: Lifecycle<PostInteractions>,
    liked: Arc<watch::Sender<BTreeSet<String>>>,
}

impl PostsContainer {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            feed: Lifecycle::new("posts.feed"),
            my_posts: Lifecycle::new("posts.mine"),
            user_posts: Lifecycle::new("posts.user"),
            detail: Lifecycle::new("posts.detail"),
            create: Lifecycle::new("posts.create"),
            like: Lifecycle::new("posts.like"),
            comments: Lifecycle::new("posts.comments"),
            comment: Lifecycle::new("posts.comment"),
            share: Lifecycle::new("posts.share"),
            interactions: Lifecycle::new("posts.interactions"),
            liked: Arc::new(watch::Sender::new(BTreeSet::new())),
        }
    }

    pub fn feed(&self) -> &Lifecycle<Vec<Post>> {
        &self.feed
    }

    pub fn my_posts(&self) -> &Lifecycle<Vec<Post>> {
        &self.my_posts
    }

    pub fn user_posts(&self) -> &Lifecycle<Vec<Post>> {
        &self.user_posts
    }

    pub fn detail(&self) -> &Lifecycle<Post> {
        &self.detail
    }

    pub fn create(&self) -> &Lifecycle<Post> {
        &self.create
    }

    pub fn like(&self) -> &Lifecycle<LikeResponse> {
        &self.like
    }

    pub fn comments(&self) -> &Lifecycle<Vec<PostComment>> {
        &self.comments
    }

    pub fn comment(&self) -> &Lifecycle<PostComment> {
        &self.comment
    }

    pub fn share(&self) -> &Lifecycle<ShareResponse> {
        &self.share
    }

    pub fn interactions(&self) -> &Lifecycle<PostInteractions> {
        &self.interactions
    }

    /// Ids of posts the current user has liked.
    pub fn liked_posts(&self) -> BTreeSet<String> {
        self.liked.borrow().clone()
    }

    pub fn is_liked(&self, post_id: &str) -> bool {
        self.liked.borrow().contains(post_id)
    }

    pub fn watch_liked(&self) -> watch::Receiver<BTreeSet<String>> {
        self.liked.subscribe()
    }

    pub async fn load_feed(&self) -> TriggerOutcome {
        self.feed
            .trigger_then(self.api.posts(), |posts| self.sync_liked(posts))
            .await
    }

    /// Reload the feed after a change, superseding any load already running.
    async fn refresh_feed(&self) -> TriggerOutcome {
        self.feed
            .refresh_then(self.api.posts(), |posts| self.sync_liked(posts))
            .await
    }

    pub async fn load_my_posts(&self) -> TriggerOutcome {
        self.my_posts.trigger(self.api.my_posts()).await
    }

    pub async fn load_user_posts(&self, user_id: &str) -> TriggerOutcome {
        self.user_posts.trigger(self.api.user_posts(user_id)).await
    }

    pub async fn load_post(&self, post_id: &str) -> TriggerOutcome {
        self.detail.trigger(self.api.post(post_id)).await
    }

    /// Publish a text post and refresh the feed.
    pub async fn create_post(&self, text: &str) -> TriggerOutcome {
        let text = text.trim();
        let api = &self.api;
        let outcome = self
            .create
            .trigger(async move {
                if text.is_empty() {
                    return Err(ApiError::InvalidInput("Post cannot be empty".to_string()));
                }
                let request = CreatePostRequest {
                    post_description: text.to_string(),
                };
                api.create_post(&request).await
            })
            .await;
        if outcome.is_success() {
            self.refresh_feed().await;
        }
        outcome
    }

    /// Publish a post with an image or video attached and refresh the feed.
    pub async fn upload_post(&self, text: &str, file: &Path) -> TriggerOutcome {
        let outcome = self
            .create
            .trigger(self.api.upload_post(text.trim(), file))
            .await;
        if outcome.is_success() {
            self.refresh_feed().await;
        }
        outcome
    }

    /// Like or unlike `post_id`, depending on the current server state.
    pub async fn toggle_like(&self, post_id: &str) -> TriggerOutcome {
        self.like
            .trigger_then(self.api.like_post(post_id), |response| {
                self.apply_like(response)
            })
            .await
    }

    pub async fn load_comments(&self, post_id: &str) -> TriggerOutcome {
        self.comments.trigger(self.api.comments(post_id)).await
    }

    /// Add a comment, then refresh the comment list and bump the counters.
    pub async fn add_comment(&self, post_id: &str, content: &str) -> TriggerOutcome {
        let content = content.trim();
        let api = &self.api;
        let outcome = self
            .comment
            .trigger(async move {
                if content.is_empty() {
                    return Err(ApiError::InvalidInput("Comment cannot be empty".to_string()));
                }
                api.add_comment(post_id, content).await
            })
            .await;
        if outcome.is_success() {
            self.patch_post(post_id, |post| post.comments_count += 1);
            self.comments.refresh(self.api.comments(post_id)).await;
        }
        outcome
    }

    pub async fn share_post(&self, post_id: &str) -> TriggerOutcome {
        self.share
            .trigger_then(self.api.share_post(post_id), |response| {
                self.patch_post(&response.post_id, |post| {
                    post.shares_count = response.shares_count;
                });
            })
            .await
    }

    pub async fn load_interactions(&self, post_id: &str) -> TriggerOutcome {
        self.interactions
            .trigger(self.api.interactions(post_id))
            .await
    }

    /// Return every slot to Idle and forget the liked set.
    pub fn reset(&self) {
        for slot in [&self.feed, &self.my_posts, &self.user_posts] {
            slot.reset();
        }
        self.detail.reset();
        self.create.reset();
        self.like.reset();
        self.comments.reset();
        self.comment.reset();
        self.share.reset();
        self.interactions.reset();
        self.liked.send_if_modified(|set| {
            let changed = !set.is_empty();
            set.clear();
            changed
        });
    }

    fn sync_liked(&self, posts: &[Post]) {
        let liked: BTreeSet<String> = posts
            .iter()
            .filter(|post| post.liked_by_current_user)
            .map(|post| post.id.clone())
            .collect();
        self.liked.send_if_modified(|current| {
            if *current == liked {
                return false;
            }
            *current = liked;
            true
        });
    }

    fn apply_like(&self, response: &LikeResponse) {
        self.liked.send_if_modified(|set| {
            if response.liked_by_current_user {
                set.insert(response.post_id.clone())
            } else {
                set.remove(&response.post_id)
            }
        });
        self.patch_post(&response.post_id, |post| post.apply_like(response));
    }

    /// Apply `edit` to `post_id` wherever it is loaded.
    fn patch_post(&self, post_id: &str, edit: impl Fn(&mut Post)) {
        for slot in [&self.feed, &self.my_posts, &self.user_posts] {
            slot.patch(|posts| {
                posts
                    .iter_mut()
                    .filter(|post| post.id == post_id)
                    .for_each(&edit)
            });
        }
        self.detail.patch(|post| {
            if post.id == post_id {
                edit(post)
            }
        });
    }
}
