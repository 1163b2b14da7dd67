//! TUI widgets for the cast generator

pub mod activity_log;
pub mod cast_panel;
pub mod form_panel;
pub mod progress;
pub mod relations;
pub mod status_bar;

pub use activity_log::ActivityLogWidget;
pub use cast_panel::CastPanelWidget;
pub use form_panel::FormPanelWidget;
pub use progress::ProgressWidget;
pub use relations::RelationsWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget};
