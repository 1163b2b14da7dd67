//! UI module for the cast generator TUI

pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;

/// Which panel is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Form,
    Log,
    Cast,
}
