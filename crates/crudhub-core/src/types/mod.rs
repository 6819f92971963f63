//! Core type definitions used across the CrudHub workspace.

pub mod form;
pub mod id;
pub mod pagination;
pub mod response;

pub use form::{EditForm, FieldKind, FormField, FormSchema};
pub use id::*;
pub use pagination::{PageRequest, PageResponse};
pub use response::{ApiErrorResponse, MessageResponse};
