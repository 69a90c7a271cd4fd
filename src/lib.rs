/// Folio - Portfolio Book (TUI Edition)
///
/// Core library that lays a portfolio's projects and experiences out as
/// two-page spreads and walks them with a turn-by-turn navigator.

pub mod api;
pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
