//! Root layout: header, open book (two pages around a spine), pager, status bar.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::navigation::Direction;

/// Width of the spine between the two pages.
pub const SPINE_WIDTH: u16 = 1;

/// Computed layout regions for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookLayout {
    /// Title row.
    pub header: Rect,
    /// The whole book including its binding; the click target.
    pub book: Rect,
    /// Left page content area.
    pub left_page: Rect,
    /// Spine column.
    pub spine: Rect,
    /// Right page content area.
    pub right_page: Rect,
    /// "Spread i / n" row.
    pub pager: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl BookLayout {
    /// Compute layout regions from the terminal area.
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Book
            Constraint::Length(1), // Pager
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        let book = rows[1];
        // Inside the leather binding
        let inner = Rect {
            x: book.x.saturating_add(1),
            y: book.y.saturating_add(1),
            width: book.width.saturating_sub(2),
            height: book.height.saturating_sub(2),
        };

        let cols = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(SPINE_WIDTH),
            Constraint::Fill(1),
        ])
        .split(inner);

        Self {
            header: rows[0],
            book,
            left_page: cols[0],
            spine: cols[1],
            right_page: cols[2],
            pager: rows[2],
            status: rows[3],
        }
    }

    /// Click zones: a click on the right half of the book turns forward, on
    /// the left half backward. Clicks outside the book map to nothing.
    pub fn click_direction(&self, column: u16, row: u16) -> Option<Direction> {
        let b = self.book;
        let inside = column >= b.x
            && column < b.x.saturating_add(b.width)
            && row >= b.y
            && row < b.y.saturating_add(b.height);
        if !inside {
            return None;
        }
        let middle = b.x + b.width / 2;
        Some(if column >= middle {
            Direction::Forward
        } else {
            Direction::Backward
        })
    }
}

/// Calculate a centered rect using percentage of parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
