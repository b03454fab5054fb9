//! Application layer - configuration and scan orchestration.

mod config;
mod scanner;

pub use config::{Config, LoggingConfig};
pub use scanner::{fetch_warning, ScanReport, Scanner};
