//! The dashboard controller: owns the student list and the add/edit/delete workflow.

mod actions;
pub mod actor;
pub mod confirmation;
pub mod state;

pub use actions::*;
pub use actor::*;
pub use confirmation::*;
pub use state::*;
