//! Terminal front end: renders the open book and turns pages.

pub mod app;
pub mod audio;
pub mod events;
pub mod layout;
pub mod theme;
pub mod views;
pub mod widgets;
