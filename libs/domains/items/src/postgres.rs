use async_trait::async_trait;
use sea_orm::sea_query::{BinOper, Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Select, SqlErr,
};
use validator::ValidationErrors;

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::{Item, NewItem},
    query::ItemQuery,
    repository::ItemRepository,
    validation,
};

#[derive(Clone)]
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Builds the `SELECT` for a query. Criteria are ANDed, rows come back by id.
fn search_select(query: &ItemQuery) -> Select<entity::Entity> {
    let mut select = entity::Entity::find();

    if let Some(fragment) = &query.name {
        // LOWER on both sides; Postgres' default LIKE escape is `\`.
        let name = Func::lower(Expr::col((entity::Entity, entity::Column::Name)));
        let pattern = Func::lower(Expr::val(fragment.like_pattern()));
        select = select.filter(Expr::expr(name).binary(BinOper::Like, pattern));
    }
    if let Some(min) = query.price.min {
        select = select.filter(entity::Column::UnitPrice.gte(min));
    }
    if let Some(max) = query.price.max {
        select = select.filter(entity::Column::UnitPrice.lte(max));
    }

    select.order_by_asc(entity::Column::Id)
}

/// Foreign key violations on `merchant_id` become a field error.
fn map_write_error(err: DbErr, merchant_id: i64) -> ItemError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            let mut errors = ValidationErrors::new();
            errors.add("merchant_id", validation::merchant_must_exist(merchant_id));
            ItemError::Validation(errors)
        }
        _ => ItemError::Database(err),
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, input: NewItem) -> ItemResult<Item> {
        let merchant_id = input.merchant_id;
        let active_model: entity::ActiveModel = input.into();
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, merchant_id))?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn search(&self, query: ItemQuery) -> ItemResult<Vec<Item>> {
        let models = search_select(&query).all(&self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, item: Item) -> ItemResult<Item> {
        let (id, merchant_id) = (item.id, item.merchant_id);
        let active_model: entity::ActiveModel = item.into();

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ItemError::NotFound(id),
            e => map_write_error(e, merchant_id),
        })?;

        tracing::info!(item_id = id, "Updated item");
        Ok(model.into())
    }
}
