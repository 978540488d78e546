pub mod classification;
pub mod config;
pub mod error;
pub mod inventory;
pub mod report;
pub mod telemetry;
