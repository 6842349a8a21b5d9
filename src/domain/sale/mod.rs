use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::{
    catalog::PriceCatalog,
    number::{self, Rejected},
};

#[derive(Debug, Deserialize)]
struct SaleRecord {
    #[serde(rename = "Product")]
    product: Option<Value>,
    #[serde(rename = "Quantity")]
    quantity: Option<Value>,
}

/// Reason a sale entry was left out of the total.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SaleWarning {
    #[error("sale #{index} does not have the expected format, skipping")]
    NotARecord { index: usize },
    #[error("sale #{index} has no 'Product', skipping")]
    MissingProduct { index: usize },
    #[error("sale #{index} has a quantity that is not a number, skipping")]
    InvalidQuantity { index: usize },
    #[error("sale #{index} has a quantity outside the supported range, skipping")]
    QuantityOutOfRange { index: usize },
    #[error("amount of sale #{index} does not fit in the running total, skipping")]
    AmountOverflow { index: usize },
    #[error("product '{product}' of sale #{index} was not found in the catalog")]
    UnknownProduct { index: usize, product: String },
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct AggregationResult {
    pub total: Decimal,
    pub errors: usize,
}

#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Aggregation {
    pub result: AggregationResult,
    /// One entry per skipped sale, in input order.
    pub warnings: Vec<SaleWarning>,
}

impl Aggregation {
    fn skip(mut self, warning: SaleWarning) -> Self {
        self.result.errors += 1;
        self.warnings.push(warning);
        self
    }
}

/// Sum `price * quantity` over every sale whose product is in the catalog.
///
/// This never fails: entries that can't be priced are counted in
/// [`AggregationResult::errors`] and described in [`Aggregation::warnings`].
/// A missing or null quantity counts as zero.
pub fn aggregate(catalog: &PriceCatalog, sales: &[Value]) -> Aggregation {
    sales
        .iter()
        .enumerate()
        .fold(Aggregation::default(), |mut acc, (index, sale)| {
            let total = line_amount(catalog, index, sale).and_then(|amount| {
                acc.result
                    .total
                    .checked_add(amount)
                    .ok_or(SaleWarning::AmountOverflow { index })
            });

            match total {
                Ok(total) => {
                    acc.result.total = total;
                    acc
                }
                Err(warning) => acc.skip(warning),
            }
        })
}

fn line_amount(
    catalog: &PriceCatalog,
    index: usize,
    sale: &Value,
) -> Result<Decimal, SaleWarning> {
    if !sale.is_object() {
        return Err(SaleWarning::NotARecord { index });
    }

    // Both fields are raw values, so this only fails on a non-object.
    let record = SaleRecord::deserialize(sale).map_err(|_| SaleWarning::NotARecord { index })?;

    let product = record
        .product
        .ok_or(SaleWarning::MissingProduct { index })?;
    let quantity = match record.quantity {
        None => Decimal::ZERO,
        Some(quantity) => number::to_decimal(&quantity).map_err(|rejected| match rejected {
            Rejected::NotANumber => SaleWarning::InvalidQuantity { index },
            Rejected::OutOfRange => SaleWarning::QuantityOutOfRange { index },
        })?,
    };

    let Some(price) = product.as_str().and_then(|title| catalog.price_of(title)) else {
        return Err(SaleWarning::UnknownProduct {
            index,
            product: match product {
                Value::String(title) => title,
                other => other.to_string(),
            },
        });
    };

    price
        .checked_mul(quantity)
        .ok_or(SaleWarning::AmountOverflow { index })
}
