use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use brain_core::{Item, ItemId, ItemStatus, ItemStore, ItemType, NewItem};
use chrono::{Duration, TimeZone, Utc};
use errors::StoreError;
use storage::MemoryItemStore;

/// Shared secret used by server tests.
pub const TEST_SECRET: &str = "test-secret";

/// The header value a legitimate capture client sends.
pub fn bearer() -> String {
    format!("Bearer {TEST_SECRET}")
}

/// A stored row. Higher ids are created later, so a list sorted by id
/// descending is also newest first.
pub fn item(id: i64, title: &str, item_type: ItemType, status: ItemStatus) -> Item {
    let base = Utc
        .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    Item {
        id: ItemId::new(id),
        title: title.to_string(),
        content: None,
        item_type,
        status,
        created_at: base + Duration::minutes(id),
    }
}

/// A memory store wrapper whose operations can be made to fail.
///
/// Counts every call so tests can assert that a rejected request never
/// reached the store, or that an archive was retried.
#[derive(Default)]
pub struct ScriptedItemStore {
    inner: MemoryItemStore,
    fail_inserts: AtomicBool,
    fail_lists: AtomicBool,
    archive_failures: AtomicUsize,
    insert_calls: AtomicUsize,
    list_calls: AtomicUsize,
    archive_calls: AtomicUsize,
}

impl ScriptedItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            inner: MemoryItemStore::with_items(items),
            ..Default::default()
        }
    }

    pub fn fail_inserts(self) -> Self {
        self.fail_inserts.store(true, Ordering::SeqCst);
        self
    }

    pub fn fail_lists(self) -> Self {
        self.fail_lists.store(true, Ordering::SeqCst);
        self
    }

    /// The next `count` archive calls fail, later ones succeed.
    pub fn fail_archives(self, count: usize) -> Self {
        self.archive_failures.store(count, Ordering::SeqCst);
        self
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn archive_calls(&self) -> usize {
        self.archive_calls.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: ItemId) -> Option<Item> {
        self.inner.get(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The most recently inserted row, if any.
    pub fn last_inserted(&self) -> Option<Item> {
        self.inner.snapshot().pop()
    }
}

fn rejected(message: &str) -> StoreError {
    StoreError::Api {
        status: 500,
        message: message.to_string(),
    }
}

#[async_trait]
impl ItemStore for ScriptedItemStore {
    type Error = StoreError;

    async fn insert(&self, item: NewItem) -> Result<Vec<Item>, Self::Error> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(rejected("permission denied for table items"));
        }
        self.inner.insert(item).await
    }

    async fn list_recent(&self) -> Result<Vec<Item>, Self::Error> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(rejected("relation \"items\" does not exist"));
        }
        self.inner.list_recent().await
    }

    async fn archive(&self, id: ItemId) -> Result<(), Self::Error> {
        self.archive_calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.archive_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.archive_failures.store(remaining - 1, Ordering::SeqCst);
            return Err(StoreError::Connection {
                backend: "scripted".to_string(),
                reason: "connection reset by peer".to_string(),
            });
        }
        self.inner.archive(id).await
    }
}
