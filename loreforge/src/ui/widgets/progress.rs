//! Progress gauge widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Gauge, Widget},
};

use loreforge_core::ProgressState;

use crate::ui::theme::UiTheme;

/// Widget for the generation progress gauge
pub struct ProgressWidget<'a> {
    progress: &'a ProgressState,
    theme: &'a UiTheme,
    generating: bool,
}

impl<'a> ProgressWidget<'a> {
    pub fn new(progress: &'a ProgressState, theme: &'a UiTheme) -> Self {
        Self {
            progress,
            theme,
            generating: false,
        }
    }

    pub fn generating(mut self, generating: bool) -> Self {
        self.generating = generating;
        self
    }
}

impl Widget for ProgressWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Progress ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        // Backend percentages are taken as-is and may regress
        let ratio = (self.progress.percent / 100.0).clamp(0.0, 1.0);

        let label = if self.progress.step.is_empty() {
            if self.generating {
                "Working...".to_string()
            } else {
                "Idle".to_string()
            }
        } else {
            format!("{:.0}% - {}", self.progress.percent, self.progress.step)
        };

        Gauge::default()
            .block(block)
            .gauge_style(ratatui::style::Style::default().fg(self.theme.gauge_fill))
            .ratio(ratio)
            .label(label)
            .render(area, buf);
    }
}
