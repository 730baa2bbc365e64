use crate::models::{MatchView, Ranked};

/// Ranked matches in server order, with reasons indented under each card.
pub fn render_matches(view: &MatchView) -> String {
    if view.is_empty() {
        return "No matches yet. Complete your profile to improve results.".to_string();
    }
    let entries: Vec<String> = match view {
        MatchView::Investors(items) => items
            .iter()
            .enumerate()
            .map(|(rank, item)| {
                let card = &item.card;
                let mut title = card.full_name.clone();
                if let Some(firm) = &card.firm_name {
                    title.push_str(&format!(" ({})", firm));
                }
                let mut detail = card.industries.join(", ");
                if let Some(ticket) = &card.ticket_size {
                    detail.push_str(&format!(" | ticket {}", ticket));
                }
                entry(rank, item, &title, &detail)
            })
            .collect(),
        MatchView::Startups(items) => items
            .iter()
            .enumerate()
            .map(|(rank, item)| {
                let card = &item.card;
                let title = format!("{} ({})", card.startup_name, card.full_name);
                let detail = [&card.industry, &card.stage, &card.location]
                    .into_iter()
                    .filter_map(|field| field.as_deref())
                    .collect::<Vec<_>>()
                    .join(" | ");
                entry(rank, item, &title, &detail)
            })
            .collect(),
    };
    entries.join("\n")
}

fn entry<T>(rank: usize, item: &Ranked<T>, title: &str, detail: &str) -> String {
    let mut lines = vec![format!("{}. {} - score {}", rank + 1, title, item.score)];
    if !detail.is_empty() {
        lines.push(format!("   {}", detail));
    }
    lines.extend(item.reasons.iter().map(|reason| format!("   * {}", reason)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StartupCard;

    #[test]
    fn startups_keep_rank_order() {
        let card = |name: &str| StartupCard {
            user_id: name.to_string(),
            full_name: "F".to_string(),
            startup_name: name.to_string(),
            industry: Some("AI".to_string()),
            stage: None,
            location: None,
        };
        let view = MatchView::Startups(vec![
            Ranked {
                score: 91.4,
                reasons: vec!["Same industry".to_string()],
                card: card("Acme"),
            },
            Ranked {
                score: 40.0,
                reasons: vec![],
                card: card("Beta"),
            },
        ]);
        assert_eq!(
            render_matches(&view),
            "1. Acme (F) - score 91.4\n   AI\n   * Same industry\n2. Beta (F) - score 40\n   AI"
        );
    }

    #[test]
    fn empty_view() {
        assert!(render_matches(&MatchView::Investors(vec![])).starts_with("No matches"));
    }
}
