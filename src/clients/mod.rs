//! Handles for talking to actors.

#[macro_use]
mod macros;
pub mod dashboard_client;

pub use dashboard_client::*;
