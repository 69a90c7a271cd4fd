//! Paper & Ink color theme for the book.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Paper ───────────────────────────────────────────────────────────────────

/// Parchment: page background.
pub const PAPER: Color = Color::Rgb(0xF4, 0xEC, 0xD8);
/// Aged paper edge: spine and page borders.
pub const PAPER_EDGE: Color = Color::Rgb(0xC8, 0xB5, 0x8A);

// ── Ink ─────────────────────────────────────────────────────────────────────

/// Primary ink: body text on paper.
pub const INK: Color = Color::Rgb(0x2B, 0x22, 0x1A);
/// Faded ink: secondary labels, footers.
pub const INK_MUTED: Color = Color::Rgb(0x7A, 0x6A, 0x55);
/// Oxblood: headings and the cover title.
pub const OXBLOOD: Color = Color::Rgb(0x80, 0x1F, 0x1F);
/// Leather: book binding around the spread.
pub const LEATHER: Color = Color::Rgb(0x5C, 0x3A, 0x21);

// ── Chrome ──────────────────────────────────────────────────────────────────

/// Charcoal: terminal background behind the book.
pub const BG_BASE: Color = Color::Rgb(0x1A, 0x16, 0x12);
/// Primary text outside the book.
pub const TEXT: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
/// Dim text: disabled items, faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x6A, 0x60, 0x55);
/// Brass: accents, selected items, key hints.
pub const BRASS: Color = Color::Rgb(0xD4, 0xA0, 0x3C);

// ── Semantic ────────────────────────────────────────────────────────────────

/// Error: failed loads.
pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
/// Success: confirmations, healthy status.
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);
/// Warning: degraded status.
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);
/// Info: informational highlights.
pub const INFO: Color = Color::Rgb(0x42, 0xA5, 0xF5);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Body text on a page.
pub fn page() -> Style {
    Style::default().fg(INK).bg(PAPER)
}

/// Page heading.
pub fn heading() -> Style {
    Style::default()
        .fg(OXBLOOD)
        .bg(PAPER)
        .add_modifier(Modifier::BOLD)
}

/// Card title.
pub fn card_title() -> Style {
    Style::default().fg(INK).bg(PAPER).add_modifier(Modifier::BOLD)
}

/// Faded ink for subtitles and footers.
pub fn muted() -> Style {
    Style::default().fg(INK_MUTED).bg(PAPER)
}

/// Link text.
pub fn link() -> Style {
    Style::default()
        .fg(OXBLOOD)
        .bg(PAPER)
        .add_modifier(Modifier::UNDERLINED)
}

/// Page being turned over.
pub fn turning() -> Style {
    Style::default().fg(PAPER_EDGE).bg(PAPER)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(BRASS)
}

/// Dim text for disabled/faint items.
pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(BRASS)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// Leather binding around the open book.
pub fn binding() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(LEATHER))
}

/// A bordered modal block.
pub fn modal(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BRASS))
}
