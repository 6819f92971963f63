//! User repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::debug;

use crudhub_core::error::{AppError, ErrorKind};
use crudhub_core::result::AppResult;
use crudhub_core::traits::{CrudRepository, Resource};
use crudhub_core::types::form::{EditForm, FormSchema};
use crudhub_core::types::id::UserId;
use crudhub_core::types::pagination::{PageRequest, PageResponse};
use crudhub_entity::{NewUser, User, UserChanges};

/// Unique constraint on `users.email`.
const EMAIL_CONSTRAINT: &str = "users_email_key";

/// PostgreSQL-backed repository for users.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Count total users.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;
        Ok(count as u64)
    }
}

#[async_trait]
impl CrudRepository for UserRepository {
    type Id = UserId;
    type Entity = User;
    type Draft = NewUser;
    type Patch = UserChanges;

    async fn index(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let total = self.count().await?;

        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
        )
        .bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        Ok(PageResponse::new(users, page, total))
    }

    async fn create(&self) -> AppResult<FormSchema> {
        Ok(User::form_schema())
    }

    async fn store(&self, draft: NewUser) -> AppResult<User> {
        let user = User::from_new(draft, Utc::now())?;

        let created = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, email, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &user.email, "Failed to create user"))?;

        debug!(user_id = %created.id, "User stored");
        Ok(created)
    }

    async fn edit(&self, id: &UserId) -> AppResult<EditForm<User>> {
        let record = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

        Ok(EditForm {
            form: User::form_schema(),
            record,
        })
    }

    async fn put(&self, id: &UserId, patch: UserChanges) -> AppResult<User> {
        let changes = patch.normalized()?;
        let email = changes.email.clone().unwrap_or_default();

        let updated = sqlx::query_as::<_, User>(
            "UPDATE users SET name = COALESCE($2, name), \
                              email = COALESCE($3, email), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &email, "Failed to update user"))?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

        debug!(user_id = %updated.id, "User updated");
        Ok(updated)
    }

    async fn delete(&self, id: &UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_write_error(e: sqlx::Error, email: &str, context: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(EMAIL_CONSTRAINT) => {
            AppError::conflict(format!("Email '{email}' is already in use"))
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), e),
    }
}
