//! Form descriptors returned by the `create` and `edit` verbs.
//!
//! The HTTP surface is JSON only, so "show the create form" returns a
//! [`FormSchema`] describing the fields a client must submit, and "show
//! the edit form" returns the same schema together with the current
//! record.

use serde::{Deserialize, Serialize};

/// Input widget kind for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Email address.
    Email,
    /// Multi-line text.
    Textarea,
}

/// A single submittable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Field name as it appears in the request body.
    pub name: String,
    /// Widget kind.
    pub kind: FieldKind,
    /// Whether the field must be present on `store`.
    pub required: bool,
    /// Maximum length in characters, if bounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

impl FormField {
    /// A required field.
    pub fn required(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: true,
            max_length: None,
        }
    }

    /// An optional field.
    pub fn optional(name: &str, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind)
        }
    }

    /// Bound the field length.
    pub fn max_length(mut self, max: u32) -> Self {
        self.max_length = Some(max);
        self
    }
}

/// Field layout for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Resource name, e.g. `"users"`.
    pub resource: String,
    /// Fields in display order.
    pub fields: Vec<FormField>,
}

impl FormSchema {
    /// Create a schema for the given resource.
    pub fn new(resource: &str, fields: Vec<FormField>) -> Self {
        Self {
            resource: resource.to_string(),
            fields,
        }
    }

    /// Names of the required fields.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
    }
}

/// An edit form: the schema plus the record being edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditForm<T> {
    /// Field layout.
    pub form: FormSchema,
    /// Current state of the record.
    pub record: T,
}
