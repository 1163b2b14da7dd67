//! Event handling for the cast generator TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::form::FormField;
use crate::ui::FocusedPanel;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
    Submit,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a mouse event
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.scroll_up(3);
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollDown => {
            app.scroll_down(3);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcut (always works)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    // Help overlay swallows keys while open
    if app.show_help {
        return handle_help_key(app, key);
    }

    if app.editor.editing {
        handle_editing_key(app, key)
    } else {
        handle_normal_key(app, key)
    }
}

/// Handle keys while a text field is being edited
fn handle_editing_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.editor.stop_editing();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            if app.editor.selected.is_multiline() {
                app.editor.type_newline();
            } else {
                app.editor.stop_editing();
            }
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => {
            app.editor.backspace();
            EventResult::NeedsRedraw
        }
        KeyCode::Tab => {
            // Move to the next field without leaving edit flow
            app.editor.stop_editing();
            app.editor.select_next();
            app.editor.start_editing();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c) => {
            app.editor.type_char(c);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle keys in normal (navigation) mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        // Quit
        KeyCode::Char('q') => EventResult::Quit,

        // Help
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }

        // Submit the form
        KeyCode::Char('g') => EventResult::Submit,

        // Panel focus cycling
        KeyCode::Tab => {
            app.cycle_focus();
            EventResult::NeedsRedraw
        }
        KeyCode::BackTab => {
            app.cycle_focus_reverse();
            EventResult::NeedsRedraw
        }

        // Enter edit mode on the form panel
        KeyCode::Char('i') | KeyCode::Enter if app.focused_panel == FocusedPanel::Form => {
            app.editor.start_editing();
            EventResult::NeedsRedraw
        }

        // Field / list / log navigation depending on focus
        KeyCode::Char('j') | KeyCode::Down => {
            match app.focused_panel {
                FocusedPanel::Form => app.editor.select_next(),
                FocusedPanel::Log => app.scroll_down(1),
                FocusedPanel::Cast => app.select_next_character(),
            }
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            match app.focused_panel {
                FocusedPanel::Form => app.editor.select_prev(),
                FocusedPanel::Log => app.scroll_up(1),
                FocusedPanel::Cast => app.select_prev_character(),
            }
            EventResult::NeedsRedraw
        }
        KeyCode::Char('G') => {
            app.scroll_to_bottom();
            EventResult::NeedsRedraw
        }
        KeyCode::PageUp => {
            app.scroll_up(10);
            EventResult::NeedsRedraw
        }
        KeyCode::PageDown => {
            app.scroll_down(10);
            EventResult::NeedsRedraw
        }

        // Direct count entry (1-9)
        KeyCode::Char(c @ '1'..='9') if app.editor.selected == FormField::Count => {
            app.editor.form.num_characters = c.to_digit(10).unwrap_or(1) as u8;
            EventResult::NeedsRedraw
        }

        // Adjust the selected numeric field
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
            app.editor.adjust(true);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('-') | KeyCode::Left => {
            app.editor.adjust(false);
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

/// Handle key when the help overlay is open
fn handle_help_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}
