//! Card Utilities
//!
//! Helper functions for list rendering: items in, card models out.

use chrono::{DateTime, Utc};
use item_client::{format_days_ago_at, Item};

/// Action attached to a card button, tagged with the item id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    Edit(u32),
    Delete(u32),
}

impl CardAction {
    pub fn id(&self) -> u32 {
        match self {
            CardAction::Edit(id) | CardAction::Delete(id) => *id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Edit(_) => "Edit",
            CardAction::Delete(_) => "Delete",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            CardAction::Edit(_) => "button yellow",
            CardAction::Delete(_) => "button red",
        }
    }
}

/// Everything a card displays
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub img_link: String,
    pub description: String,
    pub author: String,
    /// Relative date label ("today", "2 days ago", ...)
    pub posted: String,
    pub actions: [CardAction; 2],
}

impl Card {
    pub fn from_item(item: &Item, now: DateTime<Utc>) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            img_link: item.img_link.clone(),
            description: item.description.clone(),
            author: item.author.clone(),
            posted: format_days_ago_at(&item.date_added, now),
            actions: [CardAction::Edit(item.id), CardAction::Delete(item.id)],
        }
    }
}

/// One card per item, in the order received
pub fn build_cards(items: &[Item], now: DateTime<Utc>) -> Vec<Card> {
    items.iter().map(|item| Card::from_item(item, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use item_client::iso_timestamp;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn make_item(id: u32, title: &str, days_ago: i64) -> Item {
        Item {
            id,
            title: title.to_string(),
            description: "d".to_string(),
            author: "x".to_string(),
            img_link: "u".to_string(),
            date_added: iso_timestamp(now() - Duration::days(days_ago)),
        }
    }

    #[test]
    fn test_empty_list_has_no_cards() {
        assert!(build_cards(&[], now()).is_empty());
    }

    #[test]
    fn test_cards_keep_order_and_tag_actions() {
        let items = vec![make_item(3, "C", 0), make_item(1, "A", 1), make_item(2, "B", 4)];

        let cards = build_cards(&items, now());

        assert_eq!(cards.len(), 3);
        let ids: Vec<u32> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        for card in &cards {
            let edits = card.actions.iter().filter(|a| matches!(a, CardAction::Edit(_))).count();
            let deletes = card.actions.iter().filter(|a| matches!(a, CardAction::Delete(_))).count();
            assert_eq!((edits, deletes), (1, 1));
            assert!(card.actions.iter().all(|a| a.id() == card.id));
        }
        let posted: Vec<&str> = cards.iter().map(|c| c.posted.as_str()).collect();
        assert_eq!(posted, vec!["today", "yesterday", "4 days ago"]);
    }

    #[test]
    fn test_single_card_contents() {
        let cards = build_cards(&[make_item(1, "A", 2)], now());

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "A");
        assert_eq!(cards[0].posted, "2 days ago");
        assert_eq!(cards[0].actions[1], CardAction::Delete(1));
    }

    #[test]
    fn test_unparseable_date_shows_sentinel() {
        let mut item = make_item(1, "A", 0);
        item.date_added = "garbage".to_string();

        assert_eq!(Card::from_item(&item, now()).posted, "Invalid Date");
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(CardAction::Edit(1).label(), "Edit");
        assert_eq!(CardAction::Delete(1).class(), "button red");
    }
}
