//! Status and hotkey bar widgets

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::UiTheme;

/// One-line status bar
pub struct StatusBarWidget<'a> {
    theme: &'a UiTheme,
    message: Option<&'a str>,
    editing: bool,
    generating: bool,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(theme: &'a UiTheme) -> Self {
        Self {
            theme,
            message: None,
            editing: false,
            generating: false,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn generating(mut self, generating: bool) -> Self {
        self.generating = generating;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode = if self.editing { " EDIT " } else { " VIEW " };
        let mode_style = if self.editing {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };

        let mut spans = vec![Span::styled(mode, mode_style), Span::raw(" ")];

        if self.generating {
            spans.push(Span::styled(
                "⟳ generating ",
                Style::default().fg(Color::LightBlue),
            ));
        }

        if let Some(message) = self.message {
            spans.push(Span::styled(message.to_string(), self.theme.text_style()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// One-line context hotkey bar
pub struct HotkeyBarWidget<'a> {
    theme: &'a UiTheme,
    editing: bool,
}

impl<'a> HotkeyBarWidget<'a> {
    pub fn new(theme: &'a UiTheme) -> Self {
        Self {
            theme,
            editing: false,
        }
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }
}

impl Widget for HotkeyBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = if self.editing {
            " Esc done | Enter newline | Tab next field "
        } else {
            " g generate | i edit | Tab focus | j/k move | ? help | q quit "
        };

        Paragraph::new(Line::from(Span::styled(
            hints,
            self.theme.diagnostic_style(),
        )))
        .render(area, buf);
    }
}
