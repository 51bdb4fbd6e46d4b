use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

/// Validation outcome for a bound form or request body.
///
/// Computed once per request, before the controller runs, and passed to the
/// submit actions explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelState {
    errors: BTreeMap<String, Vec<String>>,
}

impl ModelState {
    /// Run the model's declarative validation rules
    pub fn validate<T: Validate>(model: &T) -> Self {
        match model.validate() {
            Ok(()) => Self::default(),
            Err(errors) => Self::from(errors),
        }
    }

    pub fn add_model_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// Flattened `field: message` lines, as used in API error envelopes
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |message| format!("{}: {}", field, message))
            })
            .collect()
    }
}

impl From<ValidationErrors> for ModelState {
    fn from(errors: ValidationErrors) -> Self {
        let mut state = Self::default();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", error.code));
                state.add_model_error(field.to_string(), message);
            }
        }
        state
    }
}
