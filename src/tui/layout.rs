//! Root layout computation: optional progress header, page body, status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the "Step N of 3" header with its progress bar.
pub const PROGRESS_HEIGHT: u16 = 3;
/// Page bodies never grow wider than this; wider terminals center them.
pub const MAX_CONTENT_WIDTH: u16 = 80;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Wizard progress header (None on the landing page).
    pub progress: Option<Rect>,
    /// Page body.
    pub main: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    /// Compute layout regions from the terminal area.
    ///
    /// `show_progress` is true while a wizard page is on screen.
    pub fn compute(area: Rect, show_progress: bool) -> Self {
        let rows = Layout::vertical([
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        let content = center_horizontally(rows[0], MAX_CONTENT_WIDTH);
        let status = rows[1];

        if show_progress && content.height > PROGRESS_HEIGHT {
            let parts = Layout::vertical([
                Constraint::Length(PROGRESS_HEIGHT),
                Constraint::Min(1),
            ])
            .split(content);
            AppLayout {
                progress: Some(parts[0]),
                main: parts[1],
                status,
            }
        } else {
            AppLayout {
                progress: None,
                main: content,
                status,
            }
        }
    }
}

/// Shrink `area` to at most `max_width` columns, centered.
pub fn center_horizontally(area: Rect, max_width: u16) -> Rect {
    if area.width <= max_width {
        return area;
    }
    let margin = (area.width - max_width) / 2;
    Rect::new(area.x + margin, area.y, max_width, area.height)
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
