//! CSV-backed historical store for pool capacity readings.
//!
//! One `date,capacity` row per reading. The store exists to derive the
//! `capacity_growth` config input from observed history; the simulation core
//! never reads it.

use crate::domain::error::FarmError;
use crate::ports::rate_store_port::RateStorePort;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub struct CsvRateStore {
    path: PathBuf,
    readings: Vec<(NaiveDate, u64)>,
}

impl CsvRateStore {
    /// Open a store, loading any existing readings. A missing file is an
    /// empty store; it is created on the first append.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FarmError> {
        let path = path.as_ref().to_path_buf();
        let mut readings = Vec::new();

        if path.exists() {
            let mut reader = csv::Reader::from_path(&path).map_err(store_error)?;
            for result in reader.records() {
                let record = result.map_err(store_error)?;
                let date_str = record.get(0).ok_or_else(|| FarmError::Store {
                    reason: "missing date column".to_string(),
                })?;
                let date =
                    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| FarmError::Store {
                        reason: format!("invalid date '{date_str}': {e}"),
                    })?;
                let value_str = record.get(1).ok_or_else(|| FarmError::Store {
                    reason: "missing capacity column".to_string(),
                })?;
                let value: u64 = value_str.parse().map_err(|_| FarmError::Store {
                    reason: format!("invalid capacity '{value_str}'"),
                })?;
                readings.push((date, value));
            }
            readings.sort_by_key(|(date, _)| *date);
        }

        Ok(Self { path, readings })
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    fn persist(&self) -> Result<(), FarmError> {
        let mut writer = csv::Writer::from_path(&self.path).map_err(store_error)?;
        writer
            .write_record(["date", "capacity"])
            .map_err(store_error)?;
        for (date, value) in &self.readings {
            writer
                .write_record([date.format("%Y-%m-%d").to_string(), value.to_string()])
                .map_err(store_error)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn no_history(&self) -> FarmError {
        FarmError::NoHistory {
            path: self.path.display().to_string(),
        }
    }
}

impl RateStorePort for CsvRateStore {
    fn latest(&self) -> Result<u64, FarmError> {
        self.readings
            .last()
            .map(|(_, value)| *value)
            .ok_or_else(|| self.no_history())
    }

    fn average_daily_change(&self) -> Result<i64, FarmError> {
        let (first_date, first_value) = *self.readings.first().ok_or_else(|| self.no_history())?;
        let (last_date, last_value) = *self.readings.last().ok_or_else(|| self.no_history())?;

        let days = (last_date - first_date).num_days();
        if days == 0 {
            return Err(FarmError::Store {
                reason: "need readings on at least two distinct days".to_string(),
            });
        }
        Ok((last_value as i64 - first_value as i64) / days)
    }

    fn append(&mut self, value: u64, date: NaiveDate) -> Result<(), FarmError> {
        self.readings.push((date, value));
        self.readings.sort_by_key(|(d, _)| *d);
        self.persist()
    }
}

fn store_error(e: csv::Error) -> FarmError {
    FarmError::Store {
        reason: e.to_string(),
    }
}
