//! Render orchestration for the cast generator TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{
    ActivityLogWidget, CastPanelWidget, FormPanelWidget, HotkeyBarWidget, ProgressWidget,
    RelationsWidget, StatusBarWidget,
};
use crate::ui::FocusedPanel;

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area, !app.characters.is_empty());

    render_title_bar(frame, app, layout.title_area);

    // Generation form
    let form_widget = FormPanelWidget::new(&app.editor, &app.theme)
        .error(app.error.as_deref())
        .focused(matches!(app.focused_panel, FocusedPanel::Form));
    frame.render_widget(form_widget, layout.form_area);

    // Progress gauge
    let progress_widget =
        ProgressWidget::new(&app.progress, &app.theme).generating(app.generating);
    frame.render_widget(progress_widget, layout.progress_area);

    // Activity log
    let log_widget = ActivityLogWidget::new(app.progress.visible_log(), &app.theme)
        .scroll(app.log_scroll)
        .focused(matches!(app.focused_panel, FocusedPanel::Log));
    frame.render_widget(log_widget, layout.log_area);

    // Cast panel
    let cast_widget = CastPanelWidget::new(&app.characters, &app.theme)
        .selected(app.selected_character)
        .focused(matches!(app.focused_panel, FocusedPanel::Cast));
    frame.render_widget(cast_widget, layout.cast_area);

    // Relations panel, only once a cast exists
    if !app.characters.is_empty() {
        let note = format!("Diagram: {}", app.diagram_path.display());
        let relations_widget =
            RelationsWidget::new(&app.characters, &app.theme).diagram_note(Some(&note));
        frame.render_widget(relations_widget, layout.relations_area);
    }

    // Status bar
    let status_widget = StatusBarWidget::new(&app.theme)
        .message(app.status_message())
        .editing(app.editor.editing)
        .generating(app.generating);
    frame.render_widget(status_widget, layout.status_bar);

    // Hotkey bar
    let hotkey_widget = HotkeyBarWidget::new(&app.theme).editing(app.editor.editing);
    frame.render_widget(hotkey_widget, layout.hotkey_bar);

    if app.show_help {
        render_help_overlay(frame, app, area);
    }
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let cast_info = if app.characters.is_empty() {
        String::new()
    } else {
        format!(" | {} characters", app.characters.len())
    };
    let title = format!(" Loreforge - Character Cast Generator{cast_info} ");

    let line = Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(52, 20, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            " Loreforge - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Form:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  j/k            Select field"),
        Line::from("  i or Enter     Edit selected text field"),
        Line::from("  Esc            Stop editing"),
        Line::from("  ←/→ or -/+     Adjust count and temperature"),
        Line::from("  g              Generate cast"),
        Line::from(""),
        Line::from(Span::styled(
            "Navigation:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  Tab            Cycle panel focus"),
        Line::from("  j/k            Scroll log / select character"),
        Line::from("  G              Jump log to bottom"),
        Line::from("  Mouse wheel    Scroll activity log"),
        Line::from(""),
        Line::from("  q              Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or q to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}
