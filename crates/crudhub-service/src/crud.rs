//! Generic CRUD service delegating to an injected repository.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crudhub_core::result::AppResult;
use crudhub_core::traits::{CrudRepository, Resource};
use crudhub_core::types::form::{EditForm, FormSchema};
use crudhub_core::types::pagination::{PageRequest, PageResponse};
use crudhub_database::repositories::{DynCategoryRepository, DynUserRepository};

/// Service for the users resource.
pub type UserService = CrudService<DynUserRepository>;

/// Service for the categories resource.
pub type CategoryService = CrudService<DynCategoryRepository>;

/// Forwards every CRUD verb to one repository.
///
/// Arguments and results pass through untouched; errors from the
/// repository propagate as-is.
pub struct CrudService<R: ?Sized + CrudRepository> {
    /// The backing repository.
    repo: Arc<R>,
}

impl<R: ?Sized + CrudRepository> CrudService<R> {
    /// Creates a service bound to `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Name of the resource this service serves.
    pub fn resource(&self) -> &'static str {
        <R::Entity as Resource>::NAME
    }

    /// The backing repository.
    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// Lists one page of records.
    pub async fn index(&self, page: &PageRequest) -> AppResult<PageResponse<R::Entity>> {
        debug!(
            resource = self.resource(),
            page = page.page,
            page_size = page.page_size,
            "index"
        );
        self.repo.index(page).await
    }

    /// Describes the creation form.
    pub async fn create(&self) -> AppResult<FormSchema> {
        debug!(resource = self.resource(), "create");
        self.repo.create().await
    }

    /// Persists a new record.
    pub async fn store(&self, draft: R::Draft) -> AppResult<R::Entity> {
        debug!(resource = self.resource(), "store");
        self.repo.store(draft).await
    }

    /// Describes the edit form for an existing record.
    pub async fn edit(&self, id: &R::Id) -> AppResult<EditForm<R::Entity>> {
        debug!(resource = self.resource(), id = %id, "edit");
        self.repo.edit(id).await
    }

    /// Applies changes to an existing record.
    pub async fn put(&self, id: &R::Id, patch: R::Patch) -> AppResult<R::Entity> {
        debug!(resource = self.resource(), id = %id, "put");
        self.repo.put(id, patch).await
    }

    /// Deletes a record, reporting whether one was removed.
    pub async fn delete(&self, id: &R::Id) -> AppResult<bool> {
        debug!(resource = self.resource(), id = %id, "delete");
        self.repo.delete(id).await
    }
}

impl<R: ?Sized + CrudRepository> Clone for CrudService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: ?Sized + CrudRepository> fmt::Debug for CrudService<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrudService")
            .field("resource", &self.resource())
            .finish_non_exhaustive()
    }
}
