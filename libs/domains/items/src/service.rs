//! Item Service - Business logic layer

use domain_merchants::MerchantRepository;
use std::sync::Arc;
use tracing::instrument;
use validator::{Validate, ValidationErrors};

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemFilter, ItemParams, NewItem};
use crate::query::{ItemQuery, PriceRange};
use crate::repository::ItemRepository;
use crate::validation;

/// Item operations on top of an item store and a merchant directory.
///
/// Writes go through two stages: the body is parsed into typed fields, then
/// the resulting record is validated and its merchant checked. Nothing is
/// persisted unless both stages pass.
pub struct ItemService<R: ItemRepository, M: MerchantRepository> {
    items: Arc<R>,
    merchants: Arc<M>,
}

impl<R: ItemRepository, M: MerchantRepository> ItemService<R, M> {
    pub fn new(items: R, merchants: M) -> Self {
        Self {
            items: Arc::new(items),
            merchants: Arc::new(merchants),
        }
    }

    /// Every item, or only those matching the filter when any parameter is present.
    #[instrument(skip(self))]
    pub async fn list_items(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        if filter.is_empty() {
            return self.items.list().await;
        }
        let query = ItemQuery::from_filter(&filter)?;
        self.items.search(query).await
    }

    #[instrument(skip(self))]
    pub async fn find_all_by_name(&self, fragment: &str) -> ItemResult<Vec<Item>> {
        self.items.search(ItemQuery::by_name(fragment)).await
    }

    #[instrument(skip(self))]
    pub async fn max_min_price(
        &self,
        min_price: Option<&str>,
        max_price: Option<&str>,
    ) -> ItemResult<Vec<Item>> {
        let range = PriceRange::parse(min_price, max_price)?;
        self.items.search(ItemQuery::by_price(range)).await
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i64) -> ItemResult<Item> {
        self.items
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    #[instrument(skip(self, params))]
    pub async fn create_item(&self, params: ItemParams) -> ItemResult<Item> {
        let input = validation::parse_new(&params)?;

        let mut errors = validation::collect(input.validate());
        self.check_merchant(input.merchant_id, &mut errors).await?;
        if !errors.is_empty() {
            return Err(ItemError::Validation(errors));
        }

        self.items.create(input).await
    }

    /// Merges the supplied fields into the stored item and writes it once.
    ///
    /// Returns the stored item unchanged when the body names no known field.
    #[instrument(skip(self, params))]
    pub async fn update_item(&self, id: i64, params: ItemParams) -> ItemResult<Item> {
        let mut item = self.get_item(id).await?;
        let changes = validation::parse_changes(&params)?;
        if changes.is_empty() {
            return Ok(item);
        }

        let merchant_changed = changes.merchant_id;
        changes.apply_to(&mut item);

        let mut errors = validation::collect(NewItem::from(&item).validate());
        if let Some(merchant_id) = merchant_changed {
            self.check_merchant(merchant_id, &mut errors).await?;
        }
        if !errors.is_empty() {
            return Err(ItemError::Validation(errors));
        }

        self.items.update(item).await
    }

    async fn check_merchant(
        &self,
        merchant_id: i64,
        errors: &mut ValidationErrors,
    ) -> ItemResult<()> {
        if !self.merchants.exists(merchant_id).await? {
            errors.add("merchant_id", validation::merchant_must_exist(merchant_id));
        }
        Ok(())
    }
}

impl<R: ItemRepository, M: MerchantRepository> Clone for ItemService<R, M> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            merchants: Arc::clone(&self.merchants),
        }
    }
}
