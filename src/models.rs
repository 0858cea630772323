//! Frontend Models
//!
//! List item data structures and the persisted snapshot forms.

use serde::{Deserialize, Serialize};

/// A single list entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Session-unique identifier, only used to address rendered rows
    pub id: u32,
    /// Item text content, non-empty after trimming
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Item {
    /// Create a new, not yet completed item
    pub fn new(id: u32, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Persisted form of an item (identifiers are session-scoped and not stored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    pub text: String,
    pub completed: bool,
}

impl From<&Item> for SavedItem {
    fn from(item: &Item) -> Self {
        Self {
            text: item.text.clone(),
            completed: item.completed,
        }
    }
}

/// Trim raw input into canonical item text; empty input is a validation failure
pub fn normalize_text(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Full snapshot of the current list, in insertion order
pub fn snapshot_of(items: &[Item]) -> Vec<SavedItem> {
    items.iter().map(SavedItem::from).collect()
}

/// Rebuild items from a persisted snapshot, reassigning identifiers 1..=N
pub fn items_from_snapshot(saved: Vec<SavedItem>) -> Vec<Item> {
    saved
        .into_iter()
        .enumerate()
        .map(|(index, entry)| Item {
            id: index as u32 + 1,
            text: entry.text,
            completed: entry.completed,
        })
        .collect()
}

/// Starter entries shown until a snapshot has been persisted
pub fn seed_items() -> Vec<Item> {
    ["Apples", "Milk", "Bread", "Eggs"]
        .iter()
        .enumerate()
        .map(|(index, text)| Item::new(index as u32 + 1, text.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_starts_uncompleted() {
        let item = Item::new(5, "Coffee".to_string());
        assert_eq!(item.id, 5);
        assert_eq!(item.text, "Coffee");
        assert!(!item.completed);
    }

    #[test]
    fn test_normalize_text_trims() {
        assert_eq!(normalize_text("  Milk  "), Some("Milk".to_string()));
        assert_eq!(normalize_text("Eggs"), Some("Eggs".to_string()));
    }

    #[test]
    fn test_normalize_text_rejects_empty() {
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text("   "), None);
        assert_eq!(normalize_text("\t\n"), None);
    }

    #[test]
    fn test_snapshot_preserves_order_and_state() {
        let items = vec![
            Item {
                id: 3,
                text: "Milk".to_string(),
                completed: true,
            },
            Item {
                id: 7,
                text: "Eggs".to_string(),
                completed: false,
            },
        ];

        let snapshot = snapshot_of(&items);

        assert_eq!(
            snapshot,
            vec![
                SavedItem {
                    text: "Milk".to_string(),
                    completed: true
                },
                SavedItem {
                    text: "Eggs".to_string(),
                    completed: false
                },
            ]
        );
    }

    #[test]
    fn test_items_from_snapshot_reassigns_ids() {
        let saved = vec![
            SavedItem {
                text: "Milk".to_string(),
                completed: true,
            },
            SavedItem {
                text: "Eggs".to_string(),
                completed: false,
            },
        ];

        let items = items_from_snapshot(saved);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].text, "Milk");
        assert!(items[0].completed);
        assert_eq!(items[1].id, 2);
        assert_eq!(items[1].text, "Eggs");
        assert!(!items[1].completed);
    }

    #[test]
    fn test_seed_items_are_fresh() {
        let seeds = seed_items();
        assert_eq!(seeds.len(), 4);
        assert!(seeds.iter().all(|item| !item.completed));
        // Identifiers 1..=N so the session counter can continue after them
        let ids: Vec<u32> = seeds.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
