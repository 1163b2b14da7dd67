//! Generation form editing state.

use loreforge_core::{CastForm, TEMPERATURE_STEP};

/// Fields of the generation form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    ApiKey,
    Lore,
    Names,
    Count,
    Temperature,
}

impl FormField {
    /// Display title for this field.
    pub fn title(&self) -> &'static str {
        match self {
            FormField::ApiKey => "API Key",
            FormField::Lore => "World Lore",
            FormField::Names => "Character Names",
            FormField::Count => "Characters",
            FormField::Temperature => "Temperature",
        }
    }

    /// Whether this field takes free text.
    pub fn is_text(&self) -> bool {
        matches!(self, FormField::ApiKey | FormField::Lore | FormField::Names)
    }

    /// Whether this field accepts embedded newlines.
    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Lore | FormField::Names)
    }

    pub fn next(&self) -> Self {
        match self {
            FormField::ApiKey => FormField::Lore,
            FormField::Lore => FormField::Names,
            FormField::Names => FormField::Count,
            FormField::Count => FormField::Temperature,
            FormField::Temperature => FormField::ApiKey,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::ApiKey => FormField::Temperature,
            FormField::Lore => FormField::ApiKey,
            FormField::Names => FormField::Lore,
            FormField::Count => FormField::Names,
            FormField::Temperature => FormField::Count,
        }
    }
}

/// The form plus which field is selected and whether it is being edited.
#[derive(Debug, Clone, Default)]
pub struct FormEditor {
    pub form: CastForm,
    pub selected: FormField,
    pub editing: bool,
}

impl FormEditor {
    pub fn new(form: CastForm) -> Self {
        Self {
            form,
            selected: FormField::default(),
            editing: false,
        }
    }

    /// Start editing the selected field. Numeric fields are adjusted with
    /// arrow keys instead.
    pub fn start_editing(&mut self) {
        if self.selected.is_text() {
            self.editing = true;
        }
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// Text buffer of the selected field.
    pub fn selected_text(&self) -> &str {
        match self.selected {
            FormField::ApiKey => &self.form.api_key,
            FormField::Lore => &self.form.lore_text,
            FormField::Names => &self.form.names_text,
            _ => "",
        }
    }

    /// Append a character to the selected text field.
    pub fn type_char(&mut self, c: char) {
        if let Some(buffer) = self.selected_text_mut() {
            buffer.push(c);
        }
    }

    /// Insert a newline into multiline fields.
    pub fn type_newline(&mut self) {
        if self.selected.is_multiline() {
            if let Some(buffer) = self.selected_text_mut() {
                buffer.push('\n');
            }
        }
    }

    /// Remove the last character of the selected text field.
    pub fn backspace(&mut self) {
        if let Some(buffer) = self.selected_text_mut() {
            buffer.pop();
        }
    }

    /// Adjust the selected numeric field.
    pub fn adjust(&mut self, up: bool) {
        match self.selected {
            FormField::Count => self.form.adjust_count(if up { 1 } else { -1 }),
            FormField::Temperature => self
                .form
                .adjust_temperature(if up { TEMPERATURE_STEP } else { -TEMPERATURE_STEP }),
            _ => {}
        }
    }

    fn selected_text_mut(&mut self) -> Option<&mut String> {
        match self.selected {
            FormField::ApiKey => Some(&mut self.form.api_key),
            FormField::Lore => Some(&mut self.form.lore_text),
            FormField::Names => Some(&mut self.form.names_text),
            _ => None,
        }
    }
}
