//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against the learned-progress store.

pub mod check;
pub mod progress;
pub mod study;

pub use check::execute as check;
pub use progress::{reset, show as progress};
pub use study::{StudyOptions, execute as study};
