//! Terminal presentation: draws dashboard snapshots and turns typed commands into intents.

pub mod console;
pub mod render;

pub use console::*;
pub use render::*;
