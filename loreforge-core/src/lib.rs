//! Cast generation logic for the loreforge TUI.
//!
//! This crate provides:
//! - Name sanitizing for diagram node identifiers
//! - Status message formatting, filtering, and progress tracking
//! - Relationship graph construction in Mermaid syntax
//! - The diagram renderer seam and an HTML renderer
//! - Form state and submission validation
//!
//! # Quick Start
//!
//! ```ignore
//! use loreforge_core::{CastForm, build_relationship_graph};
//!
//! let mut form = CastForm::default();
//! form.names_text = "Alice\nBob\nCarol".to_string();
//! form.num_characters = 3;
//!
//! let request = form.to_request()?;
//! // ... send through genapi::GenApi, then:
//! // let diagram = build_relationship_graph(&characters);
//! ```

pub mod form;
pub mod graph;
pub mod render;
pub mod sanitize;
pub mod status;
pub mod testing;

// Re-export the wire types and client crate for convenience
pub use genapi;
pub use genapi::{CharacterRecord, ProgressEvent, RelationshipEdge, StatusMessage};

// Primary public API
pub use form::{CastForm, FormError, MAX_CHARACTERS, MIN_CHARACTERS, TEMPERATURE_STEP};
pub use graph::{build_relationship_graph, deduped_edges};
pub use render::{DiagramRenderer, HtmlRenderer, RenderError};
pub use sanitize::sanitize_name;
pub use status::{display_text, is_internal_step, ProgressState};
pub use testing::{MockRenderer, StatusHarness};
