//! Price port backed by plain configuration values.
//!
//! Serves a default unit price with optional per-symbol overrides; the
//! simulation never touches the network for prices.

use crate::domain::error::FarmError;
use crate::ports::price_port::PricePort;
use std::collections::HashMap;

pub struct FixedPriceAdapter {
    default_price: f64,
    overrides: HashMap<String, f64>,
}

impl FixedPriceAdapter {
    pub fn new(default_price: f64) -> Self {
        Self {
            default_price,
            overrides: HashMap::new(),
        }
    }

    pub fn with_price(mut self, symbol: &str, price: f64) -> Self {
        self.overrides.insert(symbol.to_uppercase(), price);
        self
    }
}

impl PricePort for FixedPriceAdapter {
    fn unit_price(&self, symbol: &str) -> Result<f64, FarmError> {
        let price = self
            .overrides
            .get(&symbol.to_uppercase())
            .copied()
            .unwrap_or(self.default_price);
        if !price.is_finite() || price <= 0.0 {
            return Err(FarmError::InvalidArgument {
                what: format!("unit price for {symbol}"),
                reason: format!("must be finite and positive, got {price}"),
            });
        }
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn serves_the_default_price() {
        let adapter = FixedPriceAdapter::new(0.01415);
        assert_relative_eq!(adapter.unit_price("ZOON").unwrap(), 0.01415);
    }

    #[test]
    fn overrides_take_precedence_case_insensitively() {
        let adapter = FixedPriceAdapter::new(0.01415).with_price("zoan", 0.02);
        assert_relative_eq!(adapter.unit_price("ZOAN").unwrap(), 0.02);
        assert_relative_eq!(adapter.unit_price("ZOON").unwrap(), 0.01415);
    }

    #[test]
    fn rejects_non_positive_prices() {
        assert!(FixedPriceAdapter::new(0.0).unit_price("ZOON").is_err());
        assert!(FixedPriceAdapter::new(-1.0).unit_price("ZOON").is_err());
        assert!(FixedPriceAdapter::new(f64::NAN).unit_price("ZOON").is_err());
    }
}
