pub mod student;
pub mod course;

pub use student::*;
pub use course::*;
