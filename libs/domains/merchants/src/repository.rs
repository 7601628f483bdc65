use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use validator::Validate;

use crate::error::MerchantResult;
use crate::models::{CreateMerchant, Merchant};

/// Merchant persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MerchantRepository: Send + Sync {
    async fn create(&self, input: CreateMerchant) -> MerchantResult<Merchant>;

    async fn get_by_id(&self, id: i64) -> MerchantResult<Option<Merchant>>;

    /// Cheaper than `get_by_id` when only existence matters.
    async fn exists(&self, id: i64) -> MerchantResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    merchants: BTreeMap<i64, Merchant>,
}

/// In-memory store with sequential ids starting at 1.
///
/// Clones share the same underlying map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMerchantRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryMerchantRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MerchantRepository for InMemoryMerchantRepository {
    async fn create(&self, input: CreateMerchant) -> MerchantResult<Merchant> {
        input.validate()?;

        let mut store = self.store.write().await;
        store.next_id += 1;
        let now = Utc::now();
        let merchant = Merchant {
            id: store.next_id,
            name: input.name,
            created_at: now,
            updated_at: now,
        };
        store.merchants.insert(merchant.id, merchant.clone());

        tracing::info!(merchant_id = merchant.id, "Created merchant");
        Ok(merchant)
    }

    async fn get_by_id(&self, id: i64) -> MerchantResult<Option<Merchant>> {
        Ok(self.store.read().await.merchants.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> MerchantResult<bool> {
        Ok(self.store.read().await.merchants.contains_key(&id))
    }
}
