pub mod logging;
pub mod models;

// Pagination engine
pub mod chunker;
pub mod content;
pub mod spreads;
pub mod navigation;
pub mod cue;
pub mod book;
