use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// A catalogue item as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub unit_price: f64,
    pub merchant_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw create/update body.
///
/// Every field keeps the JSON value exactly as sent so the parse stage can
/// tell an absent key (`None`) from an explicit `null` (`Some(Value::Null)`).
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct ItemParams {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "Widget")]
    pub name: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "A very useful widget")]
    pub description: Option<Value>,

    /// A JSON number or a numeric string
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>, example = 12.5)]
    pub unit_price: Option<Value>,

    /// A JSON integer or an integer string
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>, example = 1)]
    pub merchant_id: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Query string of `GET /items`.
///
/// Bounds stay strings here; [`crate::query::ItemQuery::from_filter`] parses them.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemFilter {
    /// Case-insensitive substring of the item name
    pub name: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<String>,
    /// Inclusive upper price bound
    pub max_price: Option<String>,
}

impl ItemFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.min_price.is_none() && self.max_price.is_none()
    }
}

/// A complete item record that has passed type parsing.
///
/// `validate()` enforces the record rules shared by create and update.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewItem {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    pub description: String,

    #[validate(range(
        exclusive_min = 0.0,
        code = "greater_than",
        message = "must be greater than 0"
    ))]
    pub unit_price: f64,

    pub merchant_id: i64,
}

impl From<&Item> for NewItem {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            unit_price: item.unit_price,
            merchant_id: item.merchant_id,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("can't be blank".into()));
    }
    Ok(())
}

/// Typed partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<f64>,
    pub merchant_id: Option<i64>,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.unit_price.is_none()
            && self.merchant_id.is_none()
    }

    pub fn apply_to(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(unit_price) = self.unit_price {
            item.unit_price = unit_price;
        }
        if let Some(merchant_id) = self.merchant_id {
            item.merchant_id = merchant_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item() -> Item {
        let now = Utc::now();
        Item {
            id: 1,
            name: "Widget".into(),
            description: "Useful".into(),
            unit_price: 10.0,
            merchant_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn params_distinguish_null_from_absent() {
        let params: ItemParams =
            serde_json::from_value(json!({"name": null, "extra": true})).unwrap();
        assert_eq!(params.name, Some(Value::Null));
        assert_eq!(params.description, None);
    }

    #[test]
    fn blank_strings_fail_record_validation() {
        let record = NewItem {
            name: "   ".into(),
            description: "ok".into(),
            unit_price: 1.0,
            merchant_id: 1,
        };
        let errors = record.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields["name"][0].code, "blank");
        assert!(!fields.contains_key("description"));
    }

    #[test]
    fn zero_price_is_not_greater_than_zero() {
        let record = NewItem {
            name: "Widget".into(),
            description: "Useful".into(),
            unit_price: 0.0,
            merchant_id: 1,
        };
        let errors = record.validate().unwrap_err();
        assert_eq!(errors.field_errors()["unit_price"][0].code, "greater_than");
    }

    #[test]
    fn changes_only_touch_supplied_fields() {
        let mut stored = item();
        ItemChanges {
            unit_price: Some(3.5),
            ..Default::default()
        }
        .apply_to(&mut stored);

        assert_eq!(stored.unit_price, 3.5);
        assert_eq!(stored.name, "Widget");
        assert_eq!(stored.merchant_id, 1);
    }

    #[test]
    fn empty_filter_is_detected() {
        assert!(ItemFilter::default().is_empty());
        let filter = ItemFilter {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(!filter.is_empty());
    }
}
