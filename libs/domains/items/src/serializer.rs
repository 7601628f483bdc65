//! Resource documents returned by the items endpoints.
//!
//! ```json
//! {"data": {"id": "1", "type": "item", "attributes": {"name": "...", "description": "...", "unit_price": 10.0, "merchant_id": 1}}}
//! ```
//!
//! Ids are rendered as strings. There is never a `relationships` member.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Item,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemAttributes {
    pub name: String,
    pub description: String,
    pub unit_price: f64,
    pub merchant_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemResource {
    #[schema(example = "1")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub attributes: ItemAttributes,
}

impl From<&Item> for ItemResource {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            kind: ResourceType::Item,
            attributes: ItemAttributes {
                name: item.name.clone(),
                description: item.description.clone(),
                unit_price: item.unit_price,
                merchant_id: item.merchant_id,
            },
        }
    }
}

/// Single-item document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemDocument {
    pub data: ItemResource,
}

impl From<&Item> for ItemDocument {
    fn from(item: &Item) -> Self {
        Self { data: item.into() }
    }
}

/// Collection document. `data` keeps the order it was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemCollectionDocument {
    pub data: Vec<ItemResource>,
}

impl From<&[Item]> for ItemCollectionDocument {
    fn from(items: &[Item]) -> Self {
        Self {
            data: items.iter().map(ItemResource::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn item(id: i64) -> Item {
        let now = Utc::now();
        Item {
            id,
            name: "Widget".into(),
            description: "Useful".into(),
            unit_price: 10.0,
            merchant_id: 4,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn single_document_shape() {
        let value = serde_json::to_value(ItemDocument::from(&item(7))).unwrap();
        assert_eq!(
            value,
            json!({
                "data": {
                    "id": "7",
                    "type": "item",
                    "attributes": {
                        "name": "Widget",
                        "description": "Useful",
                        "unit_price": 10.0,
                        "merchant_id": 4
                    }
                }
            })
        );
    }

    #[test]
    fn collection_keeps_order_and_never_has_relationships() {
        let items = [item(2), item(1)];
        let value = serde_json::to_value(ItemCollectionDocument::from(&items[..])).unwrap();
        let data = value["data"].as_array().unwrap();

        assert_eq!(data[0]["id"], "2");
        assert_eq!(data[1]["id"], "1");
        assert!(data.iter().all(|r| r.get("relationships").is_none()));
    }

    #[test]
    fn empty_collection_is_an_empty_array() {
        let value = serde_json::to_value(ItemCollectionDocument::from(&[] as &[Item])).unwrap();
        assert_eq!(value, json!({"data": []}));
    }
}
