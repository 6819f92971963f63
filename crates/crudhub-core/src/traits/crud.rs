//! The CRUD capability contract every resource repository implements.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::result::AppResult;
use crate::traits::resource::Resource;
use crate::types::form::{EditForm, FormSchema};
use crate::types::pagination::{PageRequest, PageResponse};

/// Operations a resource repository must provide so that controllers and
/// the generic CRUD service stay resource-agnostic.
///
/// The trait is object safe: the server picks an implementation at
/// runtime and holds it as `Arc<dyn CrudRepository<...>>`.
#[async_trait]
pub trait CrudRepository: Send + Sync + 'static {
    /// Primary key type.
    type Id: FromStr + fmt::Display + Send + Sync + 'static;
    /// Stored record.
    type Entity: Resource + Serialize + Send + Sync + 'static;
    /// Payload accepted by [`store`](Self::store).
    type Draft: DeserializeOwned + Send + Sync + 'static;
    /// Payload accepted by [`put`](Self::put); absent fields stay unchanged.
    type Patch: DeserializeOwned + Send + Sync + 'static;

    /// List records, one page at a time.
    async fn index(&self, page: &PageRequest) -> AppResult<PageResponse<Self::Entity>>;

    /// Describe the form for creating a record.
    async fn create(&self) -> AppResult<FormSchema>;

    /// Persist a new record and return it.
    async fn store(&self, draft: Self::Draft) -> AppResult<Self::Entity>;

    /// Describe the form for editing an existing record, including its
    /// current state. Fails with `NotFound` if the record does not exist.
    async fn edit(&self, id: &Self::Id) -> AppResult<EditForm<Self::Entity>>;

    /// Apply changes to an existing record and return the updated version.
    /// Fails with `NotFound` if the record does not exist.
    async fn put(&self, id: &Self::Id, patch: Self::Patch) -> AppResult<Self::Entity>;

    /// Delete a record. Returns `true` if a record was removed.
    async fn delete(&self, id: &Self::Id) -> AppResult<bool>;
}
