//! Static description of a resource type.

use crate::types::form::FormSchema;

/// Implemented by every entity exposed through CRUD endpoints.
pub trait Resource {
    /// Plural resource name used in routes and log fields (e.g. `"users"`).
    const NAME: &'static str;

    /// Field layout for the create and edit forms.
    fn form_schema() -> FormSchema;
}
