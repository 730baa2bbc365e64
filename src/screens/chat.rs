use crate::models::{ConversationSummary, Message, UserSummary};

pub fn render_conversations(conversations: &[ConversationSummary]) -> String {
    if conversations.is_empty() {
        return "No conversations yet.".to_string();
    }
    conversations
        .iter()
        .map(|c| {
            let unread = if c.unread_count > 0 {
                format!(" ({} unread)", c.unread_count)
            } else {
                String::new()
            };
            format!(
                "{} [{}]{}: {}",
                c.peer_name,
                c.peer_id,
                unread,
                c.last_message.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A thread, oldest first. Messages sent by `me` are prefixed with `>`.
pub fn render_thread(messages: &[Message], me: Option<&str>) -> String {
    if messages.is_empty() {
        return "No messages yet. Say hello!".to_string();
    }
    messages
        .iter()
        .map(|m| {
            let marker = if Some(m.sender_id.as_str()) == me { '>' } else { '<' };
            let mut line = format!("{} {} {}", m.timestamp, marker, m.content);
            if let Some(post_id) = &m.shared_post_id {
                line.push_str(&format!(" [shared post {}]", post_id));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Search hits, one per line.
pub fn render_users(users: &[UserSummary]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }
    users
        .iter()
        .map(|u| {
            let mut line = format!("[{}] {} ({})", u.id, u.full_name, u.user_type);
            let extra: Vec<&str> = [&u.headline, &u.industry, &u.location]
                .into_iter()
                .filter_map(|field| field.as_deref())
                .collect();
            if !extra.is_empty() {
                line.push_str(" - ");
                line.push_str(&extra.join(", "));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
