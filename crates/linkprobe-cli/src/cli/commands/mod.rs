//! CLI command handlers. Each command is in its own file.

mod check;
mod classify;
mod normalize;

pub use check::run_check;
pub use classify::run_classify;
pub use normalize::run_normalize;
