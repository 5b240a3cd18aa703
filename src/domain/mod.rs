//! Core domain types and the projection loop.

pub mod config_validation;
pub mod currency;
pub mod error;
pub mod farm;
pub mod holdings;
pub mod simulation;
pub mod strategy;
pub mod zoan;
