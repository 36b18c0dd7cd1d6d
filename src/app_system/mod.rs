//! System orchestration, configuration, startup, and shutdown logic.

pub mod dashboard_system;
pub mod config;
pub mod telemetry;

pub use dashboard_system::*;
pub use config::*;
pub use telemetry::*;
