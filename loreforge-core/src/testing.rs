//! Testing utilities for the cast generator.
//!
//! This module provides tools for integration testing:
//! - `MockRenderer` for deterministic diagram rendering without Mermaid
//! - `StatusHarness` for scripted status-channel scenarios
//! - Assertion helpers for verifying progress state

use std::sync::Mutex;

use genapi::StatusMessage;

use crate::render::{DiagramRenderer, RenderError};
use crate::status::ProgressState;

/// A renderer that records every definition it is asked to render and
/// returns a scripted result.
pub struct MockRenderer {
    outcome: Result<String, String>,
    calls: Mutex<Vec<String>>,
}

impl MockRenderer {
    /// A renderer that always succeeds with the given markup.
    pub fn succeeding(markup: impl Into<String>) -> Self {
        Self {
            outcome: Ok(markup.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A renderer that always fails with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// How many times `render` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock renderer lock").len()
    }

    /// The definitions passed to `render`, in order.
    pub fn definitions(&self) -> Vec<String> {
        self.calls.lock().expect("mock renderer lock").clone()
    }
}

impl DiagramRenderer for MockRenderer {
    fn render(&self, definition: &str) -> Result<String, RenderError> {
        self.calls
            .lock()
            .expect("mock renderer lock")
            .push(definition.to_string());
        self.outcome
            .clone()
            .map_err(RenderError::Failed)
    }
}

/// Harness that feeds scripted channel payloads through a progress state.
pub struct StatusHarness {
    /// The progress state under test.
    pub state: ProgressState,
}

impl StatusHarness {
    pub fn new() -> Self {
        Self {
            state: ProgressState::new(),
        }
    }

    /// Decode a raw JSON payload and apply it, as the channel would.
    pub fn feed_json(&mut self, payload: &str) -> &mut Self {
        let message: StatusMessage =
            serde_json::from_str(payload).expect("valid status payload");
        self.state.apply(&message);
        self
    }

    /// Apply an already-decoded message.
    pub fn feed(&mut self, message: &StatusMessage) -> &mut Self {
        self.state.apply(message);
        self
    }

    /// The filtered activity log as owned strings.
    pub fn visible(&self) -> Vec<String> {
        self.state.visible_log().map(str::to_string).collect()
    }
}

impl Default for StatusHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the displayed percentage.
#[track_caller]
pub fn assert_percent(harness: &StatusHarness, expected: f64) {
    assert_eq!(
        harness.state.percent, expected,
        "Expected progress {expected}%, got {}%",
        harness.state.percent
    );
}

/// Assert the displayed step text.
#[track_caller]
pub fn assert_step(harness: &StatusHarness, expected: &str) {
    assert_eq!(
        harness.state.step, expected,
        "Expected step {expected:?}, got {:?}",
        harness.state.step
    );
}

/// Assert the filtered log contains a line.
#[track_caller]
pub fn assert_visible_line(harness: &StatusHarness, expected: &str) {
    assert!(
        harness.visible().iter().any(|line| line == expected),
        "Expected visible log to contain {expected:?}, got {:?}",
        harness.visible()
    );
}
