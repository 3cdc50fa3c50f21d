//! In-process `items` table.

use async_trait::async_trait;
use brain_core::{Item, ItemId, ItemStatus, ItemStore, NewItem};
use chrono::Utc;
use errors::StoreError;
use parking_lot::RwLock;

/// Keeps rows in memory with the same contract as the hosted table: the
/// store assigns ids (increasing from 1) and `created_at`.
#[derive(Default)]
pub struct MemoryItemStore {
    rows: RwLock<Table>,
}

#[derive(Default)]
struct Table {
    items: Vec<Item>,
    last_id: i64,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the table with existing rows. Later inserts get ids above the
    /// highest seeded one.
    pub fn with_items(items: Vec<Item>) -> Self {
        let last_id = items.iter().map(|i| i.id.get()).max().unwrap_or(0);
        Self {
            rows: RwLock::new(Table { items, last_id }),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All rows in insertion order.
    pub fn snapshot(&self) -> Vec<Item> {
        self.rows.read().items.clone()
    }

    pub fn get(&self, id: ItemId) -> Option<Item> {
        self.rows.read().items.iter().find(|i| i.id == id).cloned()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    type Error = StoreError;

    async fn insert(&self, item: NewItem) -> Result<Vec<Item>, Self::Error> {
        let mut table = self.rows.write();
        table.last_id += 1;

        let row = Item {
            id: ItemId::new(table.last_id),
            title: item.title,
            content: item.content,
            item_type: item.item_type,
            status: item.status,
            created_at: Utc::now(),
        };
        table.items.push(row.clone());

        Ok(vec![row])
    }

    async fn list_recent(&self) -> Result<Vec<Item>, Self::Error> {
        let mut items = self.rows.read().items.clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(items)
    }

    async fn archive(&self, id: ItemId) -> Result<(), Self::Error> {
        let mut table = self.rows.write();
        if let Some(item) = table.items.iter_mut().find(|i| i.id == id) {
            item.status = ItemStatus::Archived;
        }
        Ok(())
    }
}
