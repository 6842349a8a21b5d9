use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use super::{
    error::{Error, Result},
    number::{self, Rejected},
};

/// Shape of a product entry as found in the product list.
///
/// Both fields are optional; entries missing either one are left out of the
/// catalog instead of failing the whole build.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    title: Option<String>,
    price: Option<Value>,
}

impl ProductRecord {
    /// Returns the catalog entry for a qualifying record, `None` for one that
    /// lacks a title or a price.
    fn entry(index: usize, value: &Value) -> Result<Option<(String, Decimal)>> {
        if !value.is_object() {
            return Err(Error::MalformedRecord { index });
        }

        // Only a non-textual title can fail here.
        let record = Self::deserialize(value).map_err(|_| Error::MalformedRecord { index })?;
        let (Some(title), Some(price)) = (record.title, record.price) else {
            return Ok(None);
        };

        let price = number::to_decimal(&price).map_err(|rejected| match rejected {
            Rejected::NotANumber => Error::MalformedRecord { index },
            Rejected::OutOfRange => Error::PriceOutOfRange { index },
        })?;

        Ok(Some((title, price)))
    }
}

/// Unit prices keyed by product title.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCatalog {
    prices: HashMap<String, Decimal>,
}

impl PriceCatalog {
    /// Build a catalog from a decoded product list.
    ///
    /// Products are applied in input order, so when a title repeats the last
    /// price seen is the one kept. Any element that is not a record with a
    /// textual title and a numeric price aborts the build.
    pub fn from_products(products: &[Value]) -> Result<Self> {
        let prices: HashMap<_, _> = itertools::process_results(
            products
                .iter()
                .enumerate()
                .map(|(index, value)| ProductRecord::entry(index, value)),
            |entries| entries.flatten().collect(),
        )?;
        let catalog = Self { prices };

        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        Ok(catalog)
    }

    pub fn price_of(&self, title: &str) -> Option<Decimal> {
        self.prices.get(title).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn products(value: Value) -> Vec<Value> {
        match value {
            Value::Array(items) => items,
            other => panic!("expected a list, got {other}"),
        }
    }

    #[test]
    fn builds_one_entry_per_unique_title() {
        let list = products(json!([
            {"title": "Widget", "price": 10.0, "type": "tools"},
            {"title": "Gadget", "price": 2.5},
            {"title": "Gizmo", "price": 0},
        ]));

        let catalog = PriceCatalog::from_products(&list).unwrap();

        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.price_of("Widget"), Some(dec!(10)));
        assert_eq!(catalog.price_of("Gadget"), Some(dec!(2.5)));
        assert_eq!(catalog.price_of("Gizmo"), Some(Decimal::ZERO));
        assert_eq!(catalog.price_of("Doohickey"), None);
    }

    #[test]
    fn last_duplicate_title_wins() {
        let list = products(json!([
            {"title": "Widget", "price": 10.0},
            {"title": "Widget", "price": 12.75},
        ]));

        let catalog = PriceCatalog::from_products(&list).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.price_of("Widget"), Some(dec!(12.75)));
    }

    #[test]
    fn skips_records_missing_title_or_price() {
        let list = products(json!([
            {"title": "Widget"},
            {"price": 3.0},
            {"title": null, "price": 1.0},
            {"title": "Gadget", "price": null},
            {"title": "Gizmo", "price": 4.0},
        ]));

        let catalog = PriceCatalog::from_products(&list).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.price_of("Gizmo"), Some(dec!(4)));
    }

    #[test]
    fn empty_list_is_fatal() {
        assert_eq!(PriceCatalog::from_products(&[]), Err(Error::EmptyCatalog));
    }

    #[test]
    fn no_qualifying_record_is_fatal() {
        let list = products(json!([{"title": "Widget"}, {}]));

        assert_eq!(PriceCatalog::from_products(&list), Err(Error::EmptyCatalog));
    }

    #[test]
    fn non_record_element_aborts_the_build() {
        let list = products(json!([
            {"title": "Widget", "price": 10.0},
            "Gadget",
            {"title": "Gizmo", "price": 4.0},
        ]));

        assert_eq!(
            PriceCatalog::from_products(&list),
            Err(Error::MalformedRecord { index: 1 })
        );
    }

    #[test]
    fn non_numeric_price_aborts_the_build() {
        let list = products(json!([{"title": "Widget", "price": [10]}]));

        assert_eq!(
            PriceCatalog::from_products(&list),
            Err(Error::MalformedRecord { index: 0 })
        );
    }

    #[test]
    fn numeric_text_price_is_accepted() {
        let list = products(json!([{"title": "Widget", "price": "10.50"}]));

        let catalog = PriceCatalog::from_products(&list).unwrap();

        assert_eq!(catalog.price_of("Widget"), Some(dec!(10.5)));
    }

    #[test]
    fn price_beyond_decimal_range_is_reported_as_such() {
        let list = products(json!([
            {"title": "Widget", "price": 10.0},
            {"title": "Gadget", "price": 1e30},
        ]));

        assert_eq!(
            PriceCatalog::from_products(&list),
            Err(Error::PriceOutOfRange { index: 1 })
        );
    }

    #[test]
    fn non_textual_title_aborts_the_build() {
        let list = products(json!([{"title": 7, "price": 1.0}]));

        assert_eq!(
            PriceCatalog::from_products(&list),
            Err(Error::MalformedRecord { index: 0 })
        );
    }
}
