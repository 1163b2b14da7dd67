//! Main application state and logic

use std::path::PathBuf;

use loreforge_core::{
    build_relationship_graph, CharacterRecord, DiagramRenderer, ProgressState,
};
use tokio::sync::mpsc;

use crate::form::FormEditor;
use crate::ui::theme::UiTheme;
use crate::ui::FocusedPanel;
use crate::worker::{WorkerEvent, WorkerRequest};

/// Where the rendered relationship diagram is written.
pub const DIAGRAM_FILENAME: &str = "cast_relationships.html";

/// Main application state
pub struct App {
    // Channel communication with the background tasks
    pub request_tx: mpsc::Sender<WorkerRequest>,
    pub event_rx: mpsc::Receiver<WorkerEvent>,

    // Form state
    pub editor: FormEditor,
    pub error: Option<String>,
    pub generating: bool,

    // Generation results
    pub characters: Vec<CharacterRecord>,
    pub selected_character: usize,

    // Progress display
    pub progress: ProgressState,
    pub log_scroll: usize,
    pub scroll_locked_to_bottom: bool, // True = auto-scroll on new content

    // Diagram output
    renderer: Box<dyn DiagramRenderer>,
    pub diagram_path: PathBuf,

    // UI state
    pub theme: UiTheme,
    pub focused_panel: FocusedPanel,
    pub show_help: bool,
    status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Create a new application with channel endpoints and a diagram renderer.
    pub fn new(
        request_tx: mpsc::Sender<WorkerRequest>,
        event_rx: mpsc::Receiver<WorkerEvent>,
        editor: FormEditor,
        renderer: Box<dyn DiagramRenderer>,
    ) -> Self {
        Self {
            request_tx,
            event_rx,
            editor,
            error: None,
            generating: false,
            characters: Vec::new(),
            selected_character: 0,
            progress: ProgressState::new(),
            log_scroll: 0,
            scroll_locked_to_bottom: true,
            renderer,
            diagram_path: PathBuf::from(DIAGRAM_FILENAME),
            theme: UiTheme::default(),
            focused_panel: FocusedPanel::default(),
            show_help: false,
            status_message: None,
            should_quit: false,
        }
    }

    /// Submit the form if it validates.
    ///
    /// On validation failure the error is shown inline and nothing is sent.
    /// Repeated submissions while a generation is in flight are ignored.
    pub fn submit(&mut self) {
        if self.generating {
            self.set_status("Generation already in progress");
            return;
        }

        let request = match self.editor.form.to_request() {
            Ok(request) => request,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };

        self.error = None;
        self.progress.reset();
        self.scroll_to_bottom();
        self.generating = true;
        self.set_status("Generating cast...");

        // Try to send the request (non-blocking)
        if self
            .request_tx
            .try_send(WorkerRequest::Generate(request))
            .is_err()
        {
            self.set_status("Worker busy, please wait...");
            self.generating = false;
        }
    }

    /// Apply one event from the background tasks, in arrival order.
    pub fn apply_worker_event(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::Generated(characters) => {
                self.generating = false;
                self.selected_character = 0;
                self.characters = characters;
                self.set_status(format!("Generated {} characters", self.characters.len()));
                self.refresh_diagram();
            }
            WorkerEvent::GenerationFailed(message) => {
                self.generating = false;
                self.error = Some(message);
                self.clear_status();
            }
            WorkerEvent::ChannelOpened => {
                self.progress.push_line("Status channel connected");
                self.autoscroll();
            }
            WorkerEvent::ChannelStatus(message) => {
                self.progress.apply(&message);
                self.autoscroll();
            }
            WorkerEvent::ChannelError(message) => {
                self.progress.push_line(format!("Channel error: {message}"));
                self.autoscroll();
            }
            WorkerEvent::ChannelClosed => {
                self.progress.push_line("Status channel disconnected");
                self.autoscroll();
            }
        }
    }

    /// Rebuild and write the relationship diagram for the current cast.
    ///
    /// Rendering problems never fail the generation: the diagram is skipped
    /// and a diagnostic line goes to the activity log.
    fn refresh_diagram(&mut self) {
        if self.characters.is_empty() {
            return;
        }

        let definition = build_relationship_graph(&self.characters);
        match self.renderer.render(&definition) {
            Ok(markup) => match std::fs::write(&self.diagram_path, markup) {
                Ok(()) => {
                    self.progress.push_line(format!(
                        "Relationship diagram written to {}",
                        self.diagram_path.display()
                    ));
                }
                Err(e) => {
                    self.progress
                        .push_line(format!("Could not write diagram: {e}"));
                }
            },
            Err(e) => {
                self.progress.push_line(format!("Diagram skipped: {e}"));
            }
        }
        self.autoscroll();
    }

    /// Scroll the activity log to bottom and lock to bottom
    pub fn scroll_to_bottom(&mut self) {
        // Set to max value - the widget will cap it to actual max_scroll
        self.log_scroll = usize::MAX / 2;
        self.scroll_locked_to_bottom = true;
    }

    /// Estimate max scroll based on the filtered log
    fn estimate_max_scroll(&self) -> usize {
        const ESTIMATED_VISIBLE_HEIGHT: usize = 10;
        self.progress
            .visible_log()
            .count()
            .saturating_sub(ESTIMATED_VISIBLE_HEIGHT)
    }

    /// Scroll the activity log up (unlocks from bottom)
    pub fn scroll_up(&mut self, lines: usize) {
        let max_scroll = self.estimate_max_scroll();
        if self.log_scroll > max_scroll {
            self.log_scroll = max_scroll;
        }
        self.log_scroll = self.log_scroll.saturating_sub(lines);
        self.scroll_locked_to_bottom = false;
    }

    /// Scroll the activity log down
    pub fn scroll_down(&mut self, lines: usize) {
        self.log_scroll = self.log_scroll.saturating_add(lines);
        let max_scroll = self.estimate_max_scroll();
        self.log_scroll = self.log_scroll.min(max_scroll + 100);
        // Re-locking to bottom takes an explicit G
    }

    fn autoscroll(&mut self) {
        if self.scroll_locked_to_bottom {
            self.scroll_to_bottom();
        }
    }

    /// Select the next character in the cast panel.
    pub fn select_next_character(&mut self) {
        if !self.characters.is_empty() {
            self.selected_character = (self.selected_character + 1) % self.characters.len();
        }
    }

    /// Select the previous character in the cast panel.
    pub fn select_prev_character(&mut self) {
        if !self.characters.is_empty() {
            self.selected_character =
                (self.selected_character + self.characters.len() - 1) % self.characters.len();
        }
    }

    /// Cycle to next focused panel
    pub fn cycle_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Form => FocusedPanel::Log,
            FocusedPanel::Log => FocusedPanel::Cast,
            FocusedPanel::Cast => FocusedPanel::Form,
        };
    }

    /// Cycle to previous focused panel
    pub fn cycle_focus_reverse(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Form => FocusedPanel::Cast,
            FocusedPanel::Cast => FocusedPanel::Log,
            FocusedPanel::Log => FocusedPanel::Form,
        };
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Get the current status message
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
