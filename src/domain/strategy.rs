//! Strategy configuration.
//!
//! One config object covers every variant of the projection: payout vs.
//! reinvestment-only, static vs. decaying unit price, fixed vs. growing
//! external capacity. Unused knobs stay `None`.

use super::error::FarmError;
use super::zoan::Zoan;

#[derive(Debug, Clone, PartialEq)]
pub struct Strategy {
    /// Projection horizon in days.
    pub days: u32,
    /// Asset template bought on purchase days; `None` disables reinvestment.
    pub purchase: Option<Zoan>,
    /// Buy only on days where `day % purchase_interval == 0`.
    pub purchase_interval: u32,
    /// Fraction of the balance withdrawn each day, before reward accrual.
    pub payout_ratio: Option<f64>,
    /// Fractional shrinkage applied to the unit price after each recorded row.
    pub price_decay_ratio: Option<f64>,
    /// Daily increment added to the external capacity.
    pub capacity_growth: Option<f64>,
}

impl Strategy {
    /// Reinvestment-only strategy buying every day, the most common shape.
    pub fn reinvest(days: u32, purchase: Zoan) -> Self {
        Strategy {
            days,
            purchase: Some(purchase),
            purchase_interval: 1,
            payout_ratio: None,
            price_decay_ratio: None,
            capacity_growth: None,
        }
    }

    /// No purchases, no payouts: accrual only.
    pub fn hold(days: u32) -> Self {
        Strategy {
            days,
            purchase: None,
            purchase_interval: 1,
            payout_ratio: None,
            price_decay_ratio: None,
            capacity_growth: None,
        }
    }

    pub fn validate(&self) -> Result<(), FarmError> {
        if self.days == 0 {
            return Err(FarmError::InvalidArgument {
                what: "days".to_string(),
                reason: "horizon must be at least 1 day".to_string(),
            });
        }
        if self.purchase_interval == 0 {
            return Err(FarmError::InvalidArgument {
                what: "purchase_interval".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(template) = &self.purchase {
            // A free template would make the greedy purchase loop spin forever.
            if template.price() == 0 {
                return Err(FarmError::InvalidArgument {
                    what: "purchase template".to_string(),
                    reason: "price must be positive".to_string(),
                });
            }
        }
        validate_ratio("payout_ratio", self.payout_ratio)?;
        validate_ratio("price_decay_ratio", self.price_decay_ratio)?;
        if let Some(growth) = self.capacity_growth {
            if !growth.is_finite() || growth < 0.0 {
                return Err(FarmError::InvalidArgument {
                    what: "capacity_growth".to_string(),
                    reason: format!("must be finite and non-negative, got {growth}"),
                });
            }
        }
        Ok(())
    }
}

fn validate_ratio(what: &str, value: Option<f64>) -> Result<(), FarmError> {
    if let Some(ratio) = value {
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(FarmError::InvalidArgument {
                what: what.to_string(),
                reason: format!("must be within 0..=1, got {ratio}"),
            });
        }
    }
    Ok(())
}
