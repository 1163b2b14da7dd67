//! Color theme and styling for the cast generator TUI

use ratatui::style::{Color, Modifier, Style};

/// UI color theme
#[derive(Debug, Clone)]
pub struct UiTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Form colors
    pub field_label: Color,
    pub field_selected: Color,
    pub error_text: Color,

    // Progress colors
    pub gauge_fill: Color,
    pub log_text: Color,
    pub diagnostic_text: Color,

    // Cast colors
    pub character_name: Color,
    pub relationship_text: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            field_label: Color::Gray,
            field_selected: Color::Cyan,
            error_text: Color::Red,

            gauge_fill: Color::LightBlue,
            log_text: Color::White,
            diagnostic_text: Color::DarkGray,

            character_name: Color::Yellow,
            relationship_text: Color::LightBlue,
        }
    }
}

impl UiTheme {
    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Get style for form field labels
    pub fn label_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.field_selected)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.field_label)
        }
    }

    /// Get style for validation and request errors
    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for activity log lines
    pub fn log_style(&self) -> Style {
        Style::default().fg(self.log_text)
    }

    /// Get style for connection and diagnostic lines
    pub fn diagnostic_style(&self) -> Style {
        Style::default()
            .fg(self.diagnostic_text)
            .add_modifier(Modifier::DIM)
    }

    /// Get style for character names
    pub fn name_style(&self) -> Style {
        Style::default()
            .fg(self.character_name)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for relationship lines
    pub fn relationship_style(&self) -> Style {
        Style::default().fg(self.relationship_text)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}
