//! Statistical eligibility matching for public welfare schemes.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
