//! Search criteria for the items index.
//!
//! A query is built once from the request, then evaluated either in memory
//! ([`ItemQuery::matches`]) or translated to SQL by the Postgres repository.
//! Both paths must agree: name matching lowercases the name and the
//! fragment before the substring test, price bounds are inclusive.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::models::{Item, ItemFilter};

/// Substring to look for in item names, ignoring case.
///
/// The fragment is kept as given for SQL, where the database folds both
/// sides with `LOWER`, and lowercased for in-memory matching.
#[derive(Debug, Clone, PartialEq)]
pub struct NameFragment {
    raw: String,
    folded: String,
}

impl NameFragment {
    pub fn new(fragment: &str) -> Self {
        Self {
            raw: fragment.to_string(),
            folded: fragment.to_lowercase(),
        }
    }

    /// The lowercased fragment.
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.folded)
    }

    /// `LIKE` pattern over the raw fragment with `%`, `_` and `\` escaped,
    /// wrapped in `%..%`.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.raw.len() + 2);
        pattern.push('%');
        for c in self.raw.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

/// Inclusive price bounds. A missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    /// Parses raw query-string bounds.
    ///
    /// A bound that is present but not a finite number fails with a
    /// `not_a_number` error keyed by its parameter name.
    pub fn parse(min: Option<&str>, max: Option<&str>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let min = bound(&mut errors, "min_price", min);
        let max = bound(&mut errors, "max_price", max);

        if errors.is_empty() {
            Ok(Self { min, max })
        } else {
            Err(errors)
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

fn bound(errors: &mut ValidationErrors, param: &'static str, raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            let mut e = ValidationError::new("not_a_number")
                .with_message(Cow::Borrowed("is not a number"));
            e.add_param(Cow::Borrowed("value"), &raw);
            errors.add(param, e);
            None
        }
    }
}

/// Name and price criteria, combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemQuery {
    pub name: Option<NameFragment>,
    pub price: PriceRange,
}

impl ItemQuery {
    pub fn from_filter(filter: &ItemFilter) -> Result<Self, ValidationErrors> {
        Ok(Self {
            name: filter.name.as_deref().map(NameFragment::new),
            price: PriceRange::parse(filter.min_price.as_deref(), filter.max_price.as_deref())?,
        })
    }

    pub fn by_name(fragment: &str) -> Self {
        Self {
            name: Some(NameFragment::new(fragment)),
            ..Default::default()
        }
    }

    pub fn by_price(price: PriceRange) -> Self {
        Self { name: None, price }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.name.is_none() && self.price.is_unbounded()
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.name.as_ref().is_none_or(|n| n.matches(&item.name)) && self.price.contains(item.unit_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(name: &str, unit_price: f64) -> Item {
        let now = Utc::now();
        Item {
            id: 1,
            name: name.into(),
            description: "d".into(),
            unit_price,
            merchant_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn name_match_ignores_case() {
        let query = ItemQuery::by_name("ring");
        assert!(query.matches(&item("Turing", 1.0)));
        assert!(query.matches(&item("aRing World", 1.0)));
        assert!(query.matches(&item("Boringo", 1.0)));
        assert!(!query.matches(&item("Abc", 1.0)));
    }

    #[test]
    fn name_match_folds_non_ascii_letters() {
        let lamp = item("École Lamp", 1.0);
        assert!(ItemQuery::by_name("École").matches(&lamp));
        assert!(ItemQuery::by_name("éCOLE").matches(&lamp));
        assert!(!ItemQuery::by_name("ecole").matches(&lamp));
    }

    #[test]
    fn empty_fragment_matches_everything() {
        assert!(ItemQuery::by_name("").matches(&item("Anything", 1.0)));
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = PriceRange::parse(Some("10.00"), Some("12")).unwrap();
        assert!(range.contains(10.0));
        assert!(range.contains(12.0));
        assert!(!range.contains(9.99));
        assert!(!range.contains(12.01));
    }

    #[test]
    fn single_bound_leaves_the_other_open() {
        let only_min = PriceRange::parse(Some("10.01"), None).unwrap();
        assert!(only_min.contains(1_000_000.0));
        assert!(!only_min.contains(10.0));

        let only_max = PriceRange::parse(None, Some("3.5")).unwrap();
        assert!(only_max.contains(0.01));
        assert!(!only_max.contains(3.51));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let range = PriceRange::parse(Some("20"), Some("10")).unwrap();
        assert!(!range.contains(15.0));
    }

    #[test]
    fn malformed_bounds_are_reported_per_parameter() {
        let errors = PriceRange::parse(Some("cheap"), Some("")).unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields["min_price"][0].code, "not_a_number");
        assert_eq!(fields["max_price"][0].code, "not_a_number");
    }

    #[test]
    fn name_and_price_are_intersected() {
        let query = ItemQuery {
            name: Some(NameFragment::new("ring")),
            price: PriceRange {
                min: Some(5.0),
                max: None,
            },
        };
        assert!(query.matches(&item("Turing", 10.0)));
        assert!(!query.matches(&item("Turing", 1.0)));
        assert!(!query.matches(&item("Abc", 10.0)));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(NameFragment::new("50%_Off\\").like_pattern(), r"%50\%\_Off\\%");
    }

    #[test]
    fn filter_without_criteria_is_unfiltered() {
        let query = ItemQuery::from_filter(&ItemFilter::default()).unwrap();
        assert!(query.is_unfiltered());
    }
}
