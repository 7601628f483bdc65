use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait};
use validator::Validate;

use crate::{
    entity,
    error::MerchantResult,
    models::{CreateMerchant, Merchant},
    repository::MerchantRepository,
};

#[derive(Clone)]
pub struct PgMerchantRepository {
    db: DatabaseConnection,
}

impl PgMerchantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MerchantRepository for PgMerchantRepository {
    async fn create(&self, input: CreateMerchant) -> MerchantResult<Merchant> {
        input.validate()?;

        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(merchant_id = model.id, "Created merchant");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> MerchantResult<Option<Merchant>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn exists(&self, id: i64) -> MerchantResult<bool> {
        let count = entity::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }
}
