//! # Price Quote
//!
//! Price returned by the pricing provider, and its display form.
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use vehicle_aggregation::domain::value_objects::PriceQuote;
//!
//! let quote = PriceQuote::new("USD", Decimal::from(12000));
//! assert_eq!(quote.to_string(), "USD 12000");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown when no price could be obtained for a vehicle.
pub const PRICE_FALLBACK: &str = "(consult prices)";

/// A price quote for a single vehicle.
///
/// Deserializes from the pricing service payload, which names the amount
/// `price`; `amount` is accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// ISO currency code.
    pub currency: String,
    /// Price amount.
    #[serde(alias = "price")]
    pub amount: Decimal,
}

impl PriceQuote {
    /// Creates a new price quote.
    #[must_use]
    pub fn new(currency: impl Into<String>, amount: Decimal) -> Self {
        Self {
            currency: currency.into(),
            amount,
        }
    }
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}
