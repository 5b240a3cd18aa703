//! Concrete adapter implementations for the ports.

pub mod csv_rate_store;
pub mod csv_report_adapter;
pub mod file_config_adapter;
pub mod fixed_price_adapter;
pub mod text_report_adapter;
