/// Profile Wizard - multi-step user profile manager (TUI Edition)
///
/// Core library providing the in-memory profile store, the three-step
/// wizard's validation rules, and the terminal front end that drives them.

pub mod config;
pub mod core;
pub mod error;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
