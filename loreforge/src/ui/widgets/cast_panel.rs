//! Cast display widget

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use loreforge_core::CharacterRecord;

use crate::ui::theme::UiTheme;

/// Widget for the generated cast list and selected profile
pub struct CastPanelWidget<'a> {
    characters: &'a [CharacterRecord],
    selected: usize,
    theme: &'a UiTheme,
    focused: bool,
}

impl<'a> CastPanelWidget<'a> {
    pub fn new(characters: &'a [CharacterRecord], theme: &'a UiTheme) -> Self {
        Self {
            characters,
            selected: 0,
            theme,
            focused: false,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .characters
            .iter()
            .enumerate()
            .map(|(i, character)| {
                let marker = if i == self.selected { "▸ " } else { "  " };
                let style = if i == self.selected {
                    self.theme.name_style()
                } else {
                    self.theme.text_style()
                };
                Line::from(Span::styled(format!("{marker}{}", character.name), style))
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }

    fn render_profile(&self, area: Rect, buf: &mut Buffer) {
        let Some(character) = self.characters.get(self.selected) else {
            return;
        };

        let mut lines: Vec<Line> = vec![Line::from(Span::styled(
            character.name.clone(),
            self.theme.name_style(),
        ))];

        for bio_line in &character.bio {
            lines.push(Line::from(Span::styled(
                bio_line.clone(),
                self.theme.text_style(),
            )));
        }

        if !character.knowledge.is_empty() {
            lines.push(Line::from(""));
            for knowledge_line in &character.knowledge {
                lines.push(Line::from(Span::styled(
                    format!("• {knowledge_line}"),
                    self.theme.text_style(),
                )));
            }
        }

        let relationship_count = character
            .relationships
            .as_ref()
            .map(Vec::len)
            .unwrap_or(0);
        if relationship_count > 0 {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("{relationship_count} declared relationships"),
                self.theme.relationship_style(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

impl Widget for CastPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.focused {
            " Cast [j/k select] "
        } else {
            " Cast "
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.characters.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No cast yet. Fill the form and press g.",
                self.theme.diagnostic_style(),
            )))
            .render(inner, buf);
            return;
        }

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(inner);

        self.render_list(halves[0], buf);
        self.render_profile(halves[1], buf);
    }
}
