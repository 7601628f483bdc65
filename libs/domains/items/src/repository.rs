use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, NewItem};
use crate::query::ItemQuery;

/// Item persistence.
///
/// Implementations assign ids, stamp timestamps and return items in
/// ascending id order from `list` and `search`. Callers are expected to have
/// validated records and merchant references already.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create(&self, input: NewItem) -> ItemResult<Item>;

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>>;

    async fn list(&self) -> ItemResult<Vec<Item>>;

    async fn search(&self, query: ItemQuery) -> ItemResult<Vec<Item>>;

    /// Persists every attribute of `item` in one write.
    ///
    /// Fails with [`ItemError::NotFound`] if the row no longer exists.
    async fn update(&self, item: Item) -> ItemResult<Item>;
}

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    items: BTreeMap<i64, Item>,
}

/// In-memory store with sequential ids starting at 1.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: NewItem) -> ItemResult<Item> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let now = Utc::now();
        let item = Item {
            id: store.next_id,
            name: input.name,
            description: input.description,
            unit_price: input.unit_price,
            merchant_id: input.merchant_id,
            created_at: now,
            updated_at: now,
        };
        store.items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        Ok(self.store.read().await.items.get(&id).cloned())
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        Ok(self.store.read().await.items.values().cloned().collect())
    }

    async fn search(&self, query: ItemQuery) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store
            .items
            .values()
            .filter(|item| query.matches(item))
            .cloned()
            .collect())
    }

    async fn update(&self, mut item: Item) -> ItemResult<Item> {
        let mut store = self.store.write().await;
        let existing = store
            .items
            .get_mut(&item.id)
            .ok_or(ItemError::NotFound(item.id))?;

        item.created_at = existing.created_at;
        item.updated_at = Utc::now();
        *existing = item.clone();

        tracing::info!(item_id = item.id, "Updated item");
        Ok(item)
    }
}
