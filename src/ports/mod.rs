//! Port traits the domain consumes; concrete implementations live in
//! [`crate::adapters`].

pub mod config_port;
pub mod price_port;
pub mod rate_store_port;
pub mod report_port;
