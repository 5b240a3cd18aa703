//! Historical external-capacity store port.
//!
//! Feeds the `capacity_growth` configuration input; not part of the
//! simulation core.

use crate::domain::error::FarmError;
use chrono::NaiveDate;

pub trait RateStorePort {
    /// Most recently recorded capacity reading.
    fn latest(&self) -> Result<u64, FarmError>;

    /// Average capacity change per day across the recorded history.
    fn average_daily_change(&self) -> Result<i64, FarmError>;

    /// Append a reading for `date`.
    fn append(&mut self, value: u64, date: NaiveDate) -> Result<(), FarmError>;
}
