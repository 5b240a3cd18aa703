//! Unit-price source port.
//!
//! The simulation core only ever sees a plain numeric price; whatever feeds
//! an implementation (config value, cached API response) stays outside the
//! day loop. No network I/O happens behind this trait during a run.

use crate::domain::error::FarmError;

pub trait PricePort {
    /// Current USD price for one unit of `symbol`.
    fn unit_price(&self, symbol: &str) -> Result<f64, FarmError>;
}
