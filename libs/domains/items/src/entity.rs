use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{Item, NewItem};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub unit_price: f64,
    pub merchant_id: i64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "domain_merchants::entity::Entity",
        from = "Column::MerchantId",
        to = "domain_merchants::entity::Column::Id"
    )]
    Merchant,
}

impl Related<domain_merchants::entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Merchant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            unit_price: model.unit_price,
            merchant_id: model.merchant_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<NewItem> for ActiveModel {
    fn from(input: NewItem) -> Self {
        let now = chrono::Utc::now();
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            unit_price: Set(input.unit_price),
            merchant_id: Set(input.merchant_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

/// Full-row update keyed by id. `created_at` is left to the database.
impl From<Item> for ActiveModel {
    fn from(item: Item) -> Self {
        ActiveModel {
            id: Set(item.id),
            name: Set(item.name),
            description: Set(item.description),
            unit_price: Set(item.unit_price),
            merchant_id: Set(item.merchant_id),
            created_at: NotSet,
            updated_at: Set(chrono::Utc::now().into()),
        }
    }
}
