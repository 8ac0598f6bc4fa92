//! Typed field descriptors for form inputs.
//!
//! A [`FieldSpec`] describes the data shape of one input control; rendering
//! it is the job of `ui::form_field`. Required markers are presence flags
//! only, enforcement belongs to whoever consumes the payload.

use serde::{Deserialize, Serialize};

/// Input control type for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    TextArea,
    /// Single-line URL input.
    Url,
    /// File attachment group.
    File,
}

/// Descriptor for one labeled input control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Payload key, e.g. `fullName` or `projectTitle[]`.
    pub name: String,
    /// Label shown next to the input.
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            placeholder: None,
        }
    }

    /// Mark the field as mandatory.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}
