use std::collections::BTreeSet;

use super::plural;
use crate::models::{MediaKind, Post, PostComment, PostInteractions};

/// The feed, newest first as served. `liked` marks posts the user has liked.
pub fn render_feed(posts: &[Post], liked: &BTreeSet<String>) -> String {
    if posts.is_empty() {
        return "No posts yet.".to_string();
    }
    posts
        .iter()
        .map(|post| render_entry(post, liked.contains(&post.id)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One post with its full counters.
pub fn render_post(post: &Post) -> String {
    render_entry(post, post.liked_by_current_user)
}

fn render_entry(post: &Post, liked: bool) -> String {
    let mut lines = vec![format!("[{}] {}", post.id, post.author.name)];
    if let Some(at) = &post.created_at {
        lines.push(format!("  {}", at));
    }
    lines.push(format!("  {}", post.post_description));
    if let Some(url) = &post.media_url {
        let kind = match post.media_type {
            Some(MediaKind::Video) => "video",
            _ => "image",
        };
        lines.push(format!("  ({}: {})", kind, url));
    }
    lines.push(format!(
        "  {}{} | {} | {}",
        if liked { "♥ " } else { "" },
        plural(post.likes_count, "like"),
        plural(post.comments_count, "comment"),
        plural(post.shares_count, "share"),
    ));
    lines.join("\n")
}

pub fn render_comments(comments: &[PostComment]) -> String {
    if comments.is_empty() {
        return "No comments yet.".to_string();
    }
    comments
        .iter()
        .map(|c| format!("{}: {}", c.author.name, c.content))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_interactions(interactions: &PostInteractions) -> String {
    format!(
        "{} | {} | {}{}",
        plural(interactions.likes_count, "like"),
        plural(interactions.comments_count, "comment"),
        plural(interactions.shares_count, "share"),
        if interactions.liked_by_current_user {
            " | liked by you"
        } else {
            ""
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRef;

    fn post(id: &str, text: &str) -> Post {
        Post {
            id: id.to_string(),
            author: UserRef {
                id: "u1".to_string(),
                name: "Ada".to_string(),
                user_type: None,
            },
            post_description: text.to_string(),
            media_url: None,
            media_type: None,
            likes_count: 1,
            comments_count: 2,
            shares_count: 0,
            liked_by_current_user: false,
            created_at: None,
        }
    }

    #[test]
    fn empty_feed() {
        assert_eq!(render_feed(&[], &BTreeSet::new()), "No posts yet.");
    }

    #[test]
    fn feed_marks_liked_posts() {
        let liked = BTreeSet::from(["p2".to_string()]);
        let text = render_feed(&[post("p1", "first"), post("p2", "second")], &liked);
        let (first, second) = text.split_once("\n\n").unwrap();
        assert!(first.contains("first") && !first.contains('♥'));
        assert!(second.contains("♥ 1 like | 2 comments | 0 shares"));
    }

    #[test]
    fn media_is_labelled() {
        let mut p = post("p1", "demo");
        p.media_url = Some("https://cdn/x.mp4".to_string());
        p.media_type = Some(MediaKind::Video);
        assert!(render_post(&p).contains("(video: https://cdn/x.mp4)"));
    }
}
