//! Generation form widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::form::{FormEditor, FormField};
use crate::ui::theme::UiTheme;

/// Widget for displaying and editing the generation form
pub struct FormPanelWidget<'a> {
    editor: &'a FormEditor,
    theme: &'a UiTheme,
    error: Option<&'a str>,
    focused: bool,
}

impl<'a> FormPanelWidget<'a> {
    pub fn new(editor: &'a FormEditor, theme: &'a UiTheme) -> Self {
        Self {
            editor,
            theme,
            error: None,
            focused: false,
        }
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Display value of a field, masking the API key.
    fn field_value(&self, field: FormField) -> String {
        let form = &self.editor.form;
        match field {
            FormField::ApiKey => "•".repeat(form.api_key.chars().count()),
            FormField::Lore => form.lore_text.clone(),
            FormField::Names => form.names_text.clone(),
            FormField::Count => form.num_characters.to_string(),
            FormField::Temperature => format!("{:.1}", form.temperature),
        }
    }

    fn field_lines(&self, field: FormField) -> Vec<Line<'static>> {
        let selected = self.editor.selected == field;
        let editing = selected && self.editor.editing;

        let marker = if selected { "▸ " } else { "  " };
        let mut label = format!("{marker}{}", field.title());
        if editing {
            label.push_str(" [editing]");
        }

        let mut lines = vec![Line::from(Span::styled(
            label,
            self.theme.label_style(selected),
        ))];

        let value = self.field_value(field);
        let value_style = if editing {
            self.theme.text_style().add_modifier(Modifier::UNDERLINED)
        } else {
            self.theme.text_style()
        };

        if value.is_empty() {
            lines.push(Line::from(Span::styled(
                "    (empty)",
                self.theme.diagnostic_style(),
            )));
        } else {
            for value_line in value.lines() {
                lines.push(Line::from(Span::styled(
                    format!("    {value_line}"),
                    value_style,
                )));
            }
        }
        if editing {
            // Cursor indicator on the last value line
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled("▌", value_style));
            }
        }

        lines.push(Line::from(""));
        lines
    }
}

impl Widget for FormPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.focused {
            " Generation [j/k fields, Enter edit, g generate] "
        } else {
            " Generation "
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for field in [
            FormField::ApiKey,
            FormField::Lore,
            FormField::Names,
            FormField::Count,
            FormField::Temperature,
        ] {
            lines.extend(self.field_lines(field));
        }

        if let Some(error) = self.error {
            lines.push(Line::from(Span::styled(
                format!("✗ {error}"),
                self.theme.error_style(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
