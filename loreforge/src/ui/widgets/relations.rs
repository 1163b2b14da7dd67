//! Relationship summary widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use loreforge_core::{deduped_edges, CharacterRecord};

use crate::ui::theme::UiTheme;

/// Widget listing the deduplicated relationships of the current cast.
///
/// Shows the same edges the Mermaid diagram draws: one per character pair,
/// first declaration wins.
pub struct RelationsWidget<'a> {
    characters: &'a [CharacterRecord],
    theme: &'a UiTheme,
    diagram_note: Option<&'a str>,
}

impl<'a> RelationsWidget<'a> {
    pub fn new(characters: &'a [CharacterRecord], theme: &'a UiTheme) -> Self {
        Self {
            characters,
            theme,
            diagram_note: None,
        }
    }

    pub fn diagram_note(mut self, note: Option<&'a str>) -> Self {
        self.diagram_note = note;
        self
    }
}

impl Widget for RelationsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Relationships ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let edges = deduped_edges(self.characters);

        let mut lines: Vec<Line> = Vec::new();
        if edges.is_empty() {
            lines.push(Line::from(Span::styled(
                "No relationships declared.",
                self.theme.diagnostic_style(),
            )));
        } else {
            for (source, edge) in &edges {
                lines.push(Line::from(vec![
                    Span::styled(format!("{source} ↔ {}", edge.name), self.theme.text_style()),
                    Span::styled(
                        format!("  {}", edge.relationship),
                        self.theme.relationship_style(),
                    ),
                ]));
            }
        }

        if let Some(note) = self.diagram_note {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                note.to_string(),
                self.theme.diagnostic_style(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
