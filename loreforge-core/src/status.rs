//! Status message formatting, filtering, and progress tracking.

use genapi::{ProgressEvent, StatusMessage};

/// Substrings marking internal process steps that are hidden from the
/// activity log.
pub const INTERNAL_STEP_MARKERS: [&str; 4] =
    ["Attempt", "Sending", "Broadcasting", "Message sent"];

/// Normalize an inbound status message into a single displayable string.
///
/// Progress events display their step text, log events their message, bare
/// strings themselves, and anything else a compact JSON dump.
pub fn display_text(message: &StatusMessage) -> String {
    match message {
        StatusMessage::Event(ProgressEvent::Progress { step, .. }) => step.clone(),
        StatusMessage::Event(ProgressEvent::Log { message }) => message.clone(),
        StatusMessage::Text(text) => text.clone(),
        StatusMessage::Other(value) => value.to_string(),
    }
}

/// Whether a formatted status line describes an internal process step.
pub fn is_internal_step(text: &str) -> bool {
    INTERNAL_STEP_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
}

/// Progress display state owned by the orchestrator view.
///
/// Progress events overwrite the percentage and step cells unconditionally;
/// there is no smoothing or monotonicity enforcement, so the percentage may
/// visually regress. The log history is ordered and never trimmed.
#[derive(Debug, Clone, Default)]
pub struct ProgressState {
    /// Last reported percentage, 0-100.
    pub percent: f64,
    /// Last reported step text.
    pub step: String,
    /// Full activity history, unfiltered.
    pub log: Vec<String>,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one inbound channel message in arrival order.
    pub fn apply(&mut self, message: &StatusMessage) {
        match message {
            StatusMessage::Event(ProgressEvent::Progress { progress, step }) => {
                self.percent = *progress;
                self.step = step.clone();
            }
            other => self.log.push(display_text(other)),
        }
    }

    /// Append a connection-lifecycle or diagnostic line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }

    /// Clear percentage, step, and history before a new submission.
    pub fn reset(&mut self) {
        self.percent = 0.0;
        self.step.clear();
        self.log.clear();
    }

    /// The log with internal process steps filtered out.
    pub fn visible_log(&self) -> impl Iterator<Item = &str> {
        self.log
            .iter()
            .map(String::as_str)
            .filter(|line| !is_internal_step(line))
    }
}
