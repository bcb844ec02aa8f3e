// Mon Oct 19 2026 - Alex

pub mod args;
pub mod commands;

pub use args::{Args, Command};
pub use commands::CommandExecutor;
