//! Display-currency conversion for ZOON amounts.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Eur,
    Dkk,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Dkk => "DKK",
        };
        f.write_str(code)
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "DKK" => Ok(Currency::Dkk),
            other => Err(format!("unknown currency {other}, expected USD, EUR or DKK")),
        }
    }
}

/// Fixed USD cross rates, injected rather than read from globals.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRates {
    pub usd_to_eur: f64,
    pub usd_to_dkk: f64,
}

impl Default for ExchangeRates {
    fn default() -> Self {
        ExchangeRates {
            usd_to_eur: 0.87,
            usd_to_dkk: 6.45,
        }
    }
}

/// Convert a ZOON amount to the target currency via its USD price.
/// Pure; rounds to 2 decimals at the end only.
pub fn convert(amount: f64, unit_price: f64, currency: Currency, rates: &ExchangeRates) -> f64 {
    let usd = amount * unit_price;
    let value = match currency {
        Currency::Usd => usd,
        Currency::Eur => usd * rates.usd_to_eur,
        Currency::Dkk => usd * rates.usd_to_dkk,
    };
    round2(value)
}

/// Round to 2 decimal places. Reporting boundary only; internal state keeps
/// full precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn usd_conversion_is_amount_times_unit_price() {
        let rates = ExchangeRates::default();
        assert_relative_eq!(convert(1000.0, 0.01415, Currency::Usd, &rates), 14.15);
    }

    #[test]
    fn eur_and_dkk_apply_cross_rates() {
        let rates = ExchangeRates::default();
        assert_relative_eq!(convert(1000.0, 0.01415, Currency::Eur, &rates), 12.31);
        assert_relative_eq!(convert(1000.0, 0.01415, Currency::Dkk, &rates), 91.27);
    }

    #[test]
    fn conversion_is_consistent_across_currencies() {
        let rates = ExchangeRates::default();
        let usd = convert(50_000.0, 0.01415, Currency::Usd, &rates);
        let dkk = convert(50_000.0, 0.01415, Currency::Dkk, &rates);
        // Round-trips within rounding tolerance of the 2-decimal boundary.
        assert!((usd * rates.usd_to_dkk - dkk).abs() < 0.01 * rates.usd_to_dkk);
    }

    #[test]
    fn currency_parses_case_insensitively() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!("Dkk".parse::<Currency>().unwrap(), Currency::Dkk);
        assert!("GBP".parse::<Currency>().is_err());
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_relative_eq!(round2(1.005_000_1), 1.01);
        assert_relative_eq!(round2(2.344_9), 2.34);
        assert_relative_eq!(round2(-1.256), -1.26);
    }
}
