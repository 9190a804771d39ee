pub mod config;
pub mod error;
pub mod financing;
pub mod telemetry;
