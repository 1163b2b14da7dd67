//! Screen layout calculation for the cast generator TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed areas for the main screen.
pub struct AppLayout {
    pub title_area: Rect,
    pub form_area: Rect,
    pub progress_area: Rect,
    pub log_area: Rect,
    pub cast_area: Rect,
    pub relations_area: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
}

impl AppLayout {
    /// Calculate the layout: form on the left, progress/log/results on the
    /// right, status and hotkey bars at the bottom.
    pub fn calculate(area: Rect, has_cast: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Min(10),   // main content
                Constraint::Length(1), // status bar
                Constraint::Length(1), // hotkey bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // progress gauge
                Constraint::Min(6),    // activity log
                Constraint::Min(8),    // results
            ])
            .split(columns[1]);

        // The relations panel only exists once there is a cast to describe
        let (cast_area, relations_area) = if has_cast {
            let results = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(right[2]);
            (results[0], results[1])
        } else {
            (right[2], Rect::default())
        };

        Self {
            title_area: rows[0],
            form_area: columns[0],
            progress_area: right[0],
            log_area: right[1],
            cast_area,
            relations_area,
            status_bar: rows[2],
            hotkey_bar: rows[3],
        }
    }
}

/// A centered rect of fixed size, clamped to the containing area.
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
