//! Process-local repository for development and tests.
//!
//! Records live in a `Vec` behind an async `RwLock`; contents are lost
//! when the process exits. Semantics match the PostgreSQL repositories:
//! same listing order, same uniqueness conflicts, same not-found paths.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::debug;

use crudhub_core::error::AppError;
use crudhub_core::result::AppResult;
use crudhub_core::traits::{CrudRepository, Resource};
use crudhub_core::types::form::{EditForm, FormSchema};
use crudhub_core::types::id::{CategoryId, UserId};
use crudhub_core::types::pagination::{PageRequest, PageResponse};
use crudhub_entity::{Category, CategoryChanges, NewCategory, NewUser, User, UserChanges};

/// Per-entity behaviour the in-memory repository needs.
pub trait MemoryRecord: Resource + Clone + Serialize + Send + Sync + 'static {
    /// Primary key type.
    type Id: FromStr + fmt::Display + PartialEq + Copy + Send + Sync + 'static;
    /// Store payload.
    type Draft: DeserializeOwned + Send + Sync + 'static;
    /// Put payload.
    type Patch: DeserializeOwned + Send + Sync + 'static;

    /// Name of the unique column, used in conflict messages.
    const UNIQUE_FIELD: &'static str;

    /// Primary key of this record.
    fn id(&self) -> Self::Id;

    /// Value of the unique column.
    fn unique_key(&self) -> &str;

    /// Build a new record from a store payload.
    fn from_draft(draft: Self::Draft, now: DateTime<Utc>) -> AppResult<Self>;

    /// Apply a put payload in place.
    fn apply_patch(&mut self, patch: Self::Patch, now: DateTime<Utc>) -> AppResult<()>;

    /// Listing order for `index`.
    fn listing_order(a: &Self, b: &Self) -> Ordering;
}

impl MemoryRecord for User {
    type Id = UserId;
    type Draft = NewUser;
    type Patch = UserChanges;

    const UNIQUE_FIELD: &'static str = "email";

    fn id(&self) -> UserId {
        self.id
    }

    fn unique_key(&self) -> &str {
        &self.email
    }

    fn from_draft(draft: NewUser, now: DateTime<Utc>) -> AppResult<Self> {
        User::from_new(draft, now)
    }

    fn apply_patch(&mut self, patch: UserChanges, now: DateTime<Utc>) -> AppResult<()> {
        self.apply(patch, now)
    }

    // Newest first.
    fn listing_order(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }
}

impl MemoryRecord for Category {
    type Id = CategoryId;
    type Draft = NewCategory;
    type Patch = CategoryChanges;

    const UNIQUE_FIELD: &'static str = "slug";

    fn id(&self) -> CategoryId {
        self.id
    }

    fn unique_key(&self) -> &str {
        &self.slug
    }

    fn from_draft(draft: NewCategory, now: DateTime<Utc>) -> AppResult<Self> {
        Category::from_new(draft, now)
    }

    fn apply_patch(&mut self, patch: CategoryChanges, now: DateTime<Utc>) -> AppResult<()> {
        self.apply(patch, now)
    }

    fn listing_order(a: &Self, b: &Self) -> Ordering {
        a.name.cmp(&b.name)
    }
}

/// In-memory repository for any [`MemoryRecord`].
pub struct MemoryRepository<E> {
    records: RwLock<Vec<E>>,
}

impl<E: MemoryRecord> MemoryRepository<E> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the repository holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn conflict(key: &str) -> AppError {
        AppError::conflict(format!(
            "{} {} '{key}' already exists",
            E::NAME,
            E::UNIQUE_FIELD
        ))
    }

    fn not_found(id: &E::Id) -> AppError {
        AppError::not_found(format!("{} {id} not found", E::NAME))
    }
}

impl<E: MemoryRecord> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for MemoryRepository<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryRepository").finish_non_exhaustive()
    }
}

#[async_trait]
impl<E: MemoryRecord> CrudRepository for MemoryRepository<E> {
    type Id = E::Id;
    type Entity = E;
    type Draft = E::Draft;
    type Patch = E::Patch;

    async fn index(&self, page: &PageRequest) -> AppResult<PageResponse<E>> {
        let records = self.records.read().await;

        // Newest insertions first so ties in listing order favour recent records.
        let mut ordered: Vec<&E> = records.iter().rev().collect();
        ordered.sort_by(|a, b| E::listing_order(a, b));

        let items = ordered
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(PageResponse::new(items, page, records.len() as u64))
    }

    async fn create(&self) -> AppResult<FormSchema> {
        Ok(E::form_schema())
    }

    async fn store(&self, draft: E::Draft) -> AppResult<E> {
        let record = E::from_draft(draft, Utc::now())?;
        let mut records = self.records.write().await;

        if records
            .iter()
            .any(|existing| existing.unique_key() == record.unique_key())
        {
            return Err(Self::conflict(record.unique_key()));
        }

        records.push(record.clone());
        debug!(resource = E::NAME, id = %record.id(), "Record stored in memory");
        Ok(record)
    }

    async fn edit(&self, id: &E::Id) -> AppResult<EditForm<E>> {
        let records = self.records.read().await;
        let record = records
            .iter()
            .find(|r| r.id() == *id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))?;

        Ok(EditForm {
            form: E::form_schema(),
            record,
        })
    }

    async fn put(&self, id: &E::Id, patch: E::Patch) -> AppResult<E> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|r| r.id() == *id)
            .ok_or_else(|| Self::not_found(id))?;

        let mut updated = records[position].clone();
        updated.apply_patch(patch, Utc::now())?;

        if records
            .iter()
            .any(|other| other.id() != *id && other.unique_key() == updated.unique_key())
        {
            return Err(Self::conflict(updated.unique_key()));
        }

        records[position] = updated.clone();
        debug!(resource = E::NAME, id = %id, "Record updated in memory");
        Ok(updated)
    }

    async fn delete(&self, id: &E::Id) -> AppResult<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != *id);
        Ok(records.len() < before)
    }
}
