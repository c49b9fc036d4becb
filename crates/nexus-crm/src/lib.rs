pub mod config;
pub mod error;
pub mod fixtures;
pub mod store;
pub mod telemetry;
pub mod workflows;
