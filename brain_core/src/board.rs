//! The two active views of the board.

use serde::Serialize;

use crate::types::Item;

/// Active items split into actions and reflections.
///
/// Built fresh from every fetch; archived rows and uncategorized inbox rows
/// appear in neither list. Each list keeps the order of its input, which the
/// store returns newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Board {
    pub actions: Vec<Item>,
    pub reflections: Vec<Item>,
}

impl Board {
    pub fn partition(items: &[Item]) -> Self {
        let active = || items.iter().filter(|item| !item.is_archived());

        Self {
            actions: active()
                .filter(|item| item.item_type.is_action())
                .cloned()
                .collect(),
            reflections: active()
                .filter(|item| item.item_type.is_reflection())
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.reflections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemId, ItemStatus, ItemType};
    use chrono::{TimeZone, Utc};

    fn item(id: i64, item_type: ItemType, status: ItemStatus) -> Item {
        Item {
            id: ItemId::new(id),
            title: format!("item {id}"),
            content: None,
            item_type,
            status,
            created_at: Utc.timestamp_opt(1_700_000_000 - id, 0).unwrap(),
        }
    }

    #[test]
    fn test_partition_splits_by_type() {
        let items = vec![
            item(1, ItemType::Todo, ItemStatus::Inbox),
            item(2, ItemType::Note, ItemStatus::Inbox),
            item(3, ItemType::Idea, ItemStatus::Inbox),
            item(4, ItemType::Inbox, ItemStatus::Inbox),
        ];

        let board = Board::partition(&items);
        let action_ids: Vec<_> = board.actions.iter().map(|i| i.id.get()).collect();
        let reflection_ids: Vec<_> = board.reflections.iter().map(|i| i.id.get()).collect();

        assert_eq!(action_ids, vec![1]);
        assert_eq!(reflection_ids, vec![2, 3]);
    }

    #[test]
    fn test_archived_items_appear_in_neither_view() {
        let items = vec![
            item(1, ItemType::Todo, ItemStatus::Archived),
            item(2, ItemType::Note, ItemStatus::Archived),
            item(3, ItemType::Idea, ItemStatus::Archived),
            item(4, ItemType::Inbox, ItemStatus::Archived),
        ];

        let board = Board::partition(&items);
        assert!(board.is_empty());
    }

    #[test]
    fn test_partition_preserves_input_order() {
        let items = vec![
            item(9, ItemType::Todo, ItemStatus::Inbox),
            item(5, ItemType::Note, ItemStatus::Inbox),
            item(7, ItemType::Todo, ItemStatus::Inbox),
            item(3, ItemType::Idea, ItemStatus::Inbox),
        ];

        let board = Board::partition(&items);
        let action_ids: Vec<_> = board.actions.iter().map(|i| i.id.get()).collect();
        let reflection_ids: Vec<_> = board.reflections.iter().map(|i| i.id.get()).collect();

        assert_eq!(action_ids, vec![9, 7]);
        assert_eq!(reflection_ids, vec![5, 3]);
    }

    #[test]
    fn test_partition_is_restartable() {
        let items = vec![
            item(1, ItemType::Todo, ItemStatus::Inbox),
            item(2, ItemType::Note, ItemStatus::Archived),
        ];

        assert_eq!(Board::partition(&items), Board::partition(&items));
        assert!(Board::partition(&[]).is_empty());
    }
}
