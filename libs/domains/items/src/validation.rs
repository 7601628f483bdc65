//! Parse stage for item bodies.
//!
//! Turns raw JSON values into typed fields and reports presence and type
//! problems per field. Record rules (blank text, positive price) live on
//! [`NewItem`](crate::models::NewItem) and run after this stage.

use std::borrow::Cow;

use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

use crate::models::{ItemChanges, ItemParams, NewItem};

/// Parses a create body. Every field is required.
pub fn parse_new(params: &ItemParams) -> Result<NewItem, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let changes = parse_fields(params, true, &mut errors);

    match changes {
        ItemChanges {
            name: Some(name),
            description: Some(description),
            unit_price: Some(unit_price),
            merchant_id: Some(merchant_id),
        } if errors.is_empty() => Ok(NewItem {
            name,
            description,
            unit_price,
            merchant_id,
        }),
        _ => Err(errors),
    }
}

/// Parses an update body. Absent fields stay `None`.
pub fn parse_changes(params: &ItemParams) -> Result<ItemChanges, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let changes = parse_fields(params, false, &mut errors);

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(errors)
    }
}

fn parse_fields(params: &ItemParams, required: bool, errors: &mut ValidationErrors) -> ItemChanges {
    ItemChanges {
        name: field(errors, "name", params.name.as_ref(), required, text),
        description: field(
            errors,
            "description",
            params.description.as_ref(),
            required,
            text,
        ),
        unit_price: field(
            errors,
            "unit_price",
            params.unit_price.as_ref(),
            required,
            decimal,
        ),
        merchant_id: field(
            errors,
            "merchant_id",
            params.merchant_id.as_ref(),
            required,
            integer,
        ),
    }
}

fn field<T>(
    errors: &mut ValidationErrors,
    name: &'static str,
    value: Option<&Value>,
    required: bool,
    parse: fn(&Value) -> Result<T, ValidationError>,
) -> Option<T> {
    let outcome = match value {
        None if required => Err(error("required", "can't be blank")),
        None => return None,
        Some(Value::Null) => Err(error("blank", "can't be blank")),
        Some(value) => parse(value),
    };

    match outcome {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            errors.add(name, e);
            None
        }
    }
}

fn text(value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(error("invalid_type", "must be a string")),
    }
}

fn decimal(value: &Value) -> Result<f64, ValidationError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|n| n.is_finite())
        .ok_or_else(|| error("not_a_number", "is not a number"))
}

fn integer(value: &Value) -> Result<i64, ValidationError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| error("not_an_integer", "is not an integer"))
}

/// Error added under `merchant_id` when the referenced merchant is missing.
pub fn merchant_must_exist(merchant_id: i64) -> ValidationError {
    let mut e = error("must_exist", "must exist");
    e.add_param(Cow::Borrowed("value"), &merchant_id);
    e
}

/// Starts an error set from a `validate()` outcome so further checks can add to it.
pub fn collect(outcome: Result<(), ValidationErrors>) -> ValidationErrors {
    outcome.err().unwrap_or_default()
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> ItemParams {
        serde_json::from_value(value).unwrap()
    }

    fn codes(errors: &ValidationErrors, field: &str) -> Vec<String> {
        errors.field_errors()[field]
            .iter()
            .map(|e| e.code.to_string())
            .collect()
    }

    #[test]
    fn create_accepts_numeric_strings() {
        let item = parse_new(&params(json!({
            "name": "Widget",
            "description": "Useful",
            "unit_price": " 12.50 ",
            "merchant_id": "3"
        })))
        .unwrap();

        assert_eq!(item.unit_price, 12.5);
        assert_eq!(item.merchant_id, 3);
    }

    #[test]
    fn create_reports_every_missing_field() {
        let errors = parse_new(&ItemParams::default()).unwrap_err();
        for field in ["name", "description", "unit_price", "merchant_id"] {
            assert_eq!(codes(&errors, field), vec!["required"], "{field}");
        }
    }

    #[test]
    fn explicit_null_is_blank() {
        let errors = parse_changes(&params(json!({"description": null}))).unwrap_err();
        assert_eq!(codes(&errors, "description"), vec!["blank"]);
    }

    #[test]
    fn non_numeric_price_is_not_a_number() {
        for value in [json!("abc"), json!(""), json!(true), json!([1])] {
            let errors = parse_changes(&params(json!({"unit_price": value}))).unwrap_err();
            assert_eq!(codes(&errors, "unit_price"), vec!["not_a_number"]);
        }
    }

    #[test]
    fn fractional_merchant_id_is_not_an_integer() {
        for value in [json!(1.5), json!("1.5"), json!("one")] {
            let errors = parse_changes(&params(json!({"merchant_id": value}))).unwrap_err();
            assert_eq!(codes(&errors, "merchant_id"), vec!["not_an_integer"]);
        }
    }

    #[test]
    fn non_string_name_is_invalid_type() {
        let errors = parse_changes(&params(json!({"name": 42}))).unwrap_err();
        assert_eq!(codes(&errors, "name"), vec!["invalid_type"]);
    }

    #[test]
    fn blank_text_passes_parsing() {
        let changes = parse_changes(&params(json!({"name": "  "}))).unwrap();
        assert_eq!(changes.name.as_deref(), Some("  "));
    }

    #[test]
    fn update_with_no_known_fields_is_empty() {
        let changes = parse_changes(&params(json!({"colour": "red"}))).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn must_exist_carries_the_offending_id() {
        let e = merchant_must_exist(99);
        assert_eq!(e.code, "must_exist");
        assert_eq!(e.params["value"], json!(99));
    }
}
