use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

/// Why a JSON value could not be used as an amount.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Rejected {
    NotANumber,
    /// A number that [`Decimal`] can't hold, either too large or with more
    /// than 28 fractional digits.
    OutOfRange,
}

/// Coerce a JSON number, or a string holding one, into a [`Decimal`].
pub fn to_decimal(value: &Value) -> Result<Decimal, Rejected> {
    match value {
        Value::Number(number) => {
            if let Some(n) = number.as_i64() {
                Ok(Decimal::from(n))
            } else if let Some(n) = number.as_u64() {
                Ok(Decimal::from(n))
            } else {
                number
                    .as_f64()
                    .and_then(|n| Decimal::try_from(n).ok())
                    .ok_or(Rejected::OutOfRange)
            }
        }
        Value::String(text) => {
            let text = text.trim();
            match Decimal::from_str(text) {
                Ok(amount) => Ok(amount),
                Err(_) if text.parse::<f64>().is_ok_and(f64::is_finite) => {
                    Err(Rejected::OutOfRange)
                }
                Err(_) => Err(Rejected::NotANumber),
            }
        }
        _ => Err(Rejected::NotANumber),
    }
}
