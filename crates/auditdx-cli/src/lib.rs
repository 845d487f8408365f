mod args;
mod commands;
mod handlers;
pub mod types;
mod views;

pub use args::{Cli, Commands};
pub use commands::run;
