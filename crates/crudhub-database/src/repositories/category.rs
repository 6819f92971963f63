//! Category repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::debug;

use crudhub_core::error::{AppError, ErrorKind};
use crudhub_core::result::AppResult;
use crudhub_core::traits::{CrudRepository, Resource};
use crudhub_core::types::form::{EditForm, FormSchema};
use crudhub_core::types::id::CategoryId;
use crudhub_core::types::pagination::{PageRequest, PageResponse};
use crudhub_entity::{Category, CategoryChanges, NewCategory};

/// Unique constraint on `categories.slug`.
const SLUG_CONSTRAINT: &str = "categories_slug_key";

/// PostgreSQL-backed repository for categories.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a category by primary key.
    pub async fn find_by_id(&self, id: &CategoryId) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find category by id", e)
            })
    }

    /// Count total categories.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count categories", e)
            })?;
        Ok(count as u64)
    }
}

#[async_trait]
impl CrudRepository for CategoryRepository {
    type Id = CategoryId;
    type Entity = Category;
    type Draft = NewCategory;
    type Patch = CategoryChanges;

    async fn index(&self, page: &PageRequest) -> AppResult<PageResponse<Category>> {
        let total = self.count().await?;

        let categories = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories ORDER BY name ASC, id ASC LIMIT $1 OFFSET $2",
        )
        .bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))?;

        Ok(PageResponse::new(categories, page, total))
    }

    async fn create(&self) -> AppResult<FormSchema> {
        Ok(Category::form_schema())
    }

    async fn store(&self, draft: NewCategory) -> AppResult<Category> {
        let category = Category::from_new(draft, Utc::now())?;

        let created = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (id, name, slug, description, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .bind(category.created_at)
        .bind(category.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &category.slug, "Failed to create category"))?;

        debug!(category_id = %created.id, slug = %created.slug, "Category stored");
        Ok(created)
    }

    async fn edit(&self, id: &CategoryId) -> AppResult<EditForm<Category>> {
        let record = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))?;

        Ok(EditForm {
            form: Category::form_schema(),
            record,
        })
    }

    async fn put(&self, id: &CategoryId, patch: CategoryChanges) -> AppResult<Category> {
        let changes = patch.normalized()?;
        let slug = changes.slug.clone().unwrap_or_default();

        let updated = sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = COALESCE($2, name), \
                                   slug = COALESCE($3, slug), \
                                   description = COALESCE($4, description), \
                                   updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.slug)
        .bind(&changes.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &slug, "Failed to update category"))?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))?;

        debug!(category_id = %updated.id, "Category updated");
        Ok(updated)
    }

    async fn delete(&self, id: &CategoryId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete category", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_write_error(e: sqlx::Error, slug: &str, context: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(SLUG_CONSTRAINT) => {
            AppError::conflict(format!("Category slug '{slug}' already exists"))
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), e),
    }
}
