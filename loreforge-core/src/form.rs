//! Form state and submission validation.

use genapi::GenerateRequest;
use thiserror::Error;

/// Smallest cast the backend will generate.
pub const MIN_CHARACTERS: u8 = 1;
/// Largest cast the backend will generate.
pub const MAX_CHARACTERS: u8 = 9;

/// Temperature adjustment step for the form editor.
pub const TEMPERATURE_STEP: f32 = 0.1;

/// Validation failures that block submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{requested} characters requested but only {available} names provided")]
    InsufficientNames { available: usize, requested: usize },
}

/// The generation form as the user edits it.
#[derive(Debug, Clone)]
pub struct CastForm {
    pub api_key: String,
    pub lore_text: String,
    /// Newline-delimited character names, possibly messy.
    pub names_text: String,
    pub num_characters: u8,
    pub temperature: f32,
}

impl Default for CastForm {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            lore_text: String::new(),
            names_text: String::new(),
            num_characters: 3,
            temperature: 0.7,
        }
    }
}

impl CastForm {
    /// Names split on newlines, trimmed, empties dropped.
    pub fn cleaned_names(&self) -> Vec<String> {
        self.names_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validate the form, returning the cleaned names on success.
    ///
    /// The requested character count must not exceed the number of usable
    /// names; on failure no request may be sent.
    pub fn validate(&self) -> Result<Vec<String>, FormError> {
        let names = self.cleaned_names();
        let requested = self.num_characters as usize;
        if names.len() < requested {
            return Err(FormError::InsufficientNames {
                available: names.len(),
                requested,
            });
        }
        Ok(names)
    }

    /// Build the wire request from a valid form.
    pub fn to_request(&self) -> Result<GenerateRequest, FormError> {
        let names = self.validate()?;
        Ok(GenerateRequest {
            api_key: self.api_key.clone(),
            lore_text: self.lore_text.clone(),
            names_text: names.join("\n"),
            num_characters: self.num_characters,
            temperature: self.temperature,
        })
    }

    /// Adjust the character count, clamped to the allowed range.
    pub fn adjust_count(&mut self, delta: i8) {
        let adjusted = (self.num_characters as i16 + delta as i16)
            .clamp(MIN_CHARACTERS as i16, MAX_CHARACTERS as i16);
        self.num_characters = adjusted as u8;
    }

    /// Adjust the temperature, clamped to 0.0-1.0.
    pub fn adjust_temperature(&mut self, delta: f32) {
        self.temperature = (self.temperature + delta).clamp(0.0, 1.0);
    }
}
