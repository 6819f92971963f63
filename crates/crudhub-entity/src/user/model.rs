//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crudhub_core::AppResult;
use crudhub_core::traits::Resource;
use crudhub_core::types::form::{FieldKind, FormField, FormSchema};
use crudhub_core::types::id::UserId;

/// Maximum length of the name and email columns.
const MAX_TEXT_LENGTH: u32 = 255;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, unique across users.
    pub email: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh record from a store payload.
    pub fn from_new(data: NewUser, now: DateTime<Utc>) -> AppResult<Self> {
        let data = data.normalized()?;
        Ok(Self {
            id: UserId::new(),
            name: data.name,
            email: data.email,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a put payload in place.
    pub fn apply(&mut self, changes: UserChanges, now: DateTime<Utc>) -> AppResult<()> {
        let changes = changes.normalized()?;
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        self.updated_at = now;
        Ok(())
    }
}

impl Resource for User {
    const NAME: &'static str = "users";

    fn form_schema() -> FormSchema {
        FormSchema::new(
            Self::NAME,
            vec![
                FormField::required("name", FieldKind::Text).max_length(MAX_TEXT_LENGTH),
                FormField::required("email", FieldKind::Email).max_length(MAX_TEXT_LENGTH),
            ],
        )
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewUser {
    /// Display name.
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub name: String,
    /// Email address.
    #[validate(
        email(message = "must be a valid email address"),
        length(max = 255, message = "must be at most 255 characters")
    )]
    pub email: String,
}

impl NewUser {
    /// Trim whitespace, lowercase the email, then validate.
    pub fn normalized(self) -> AppResult<Self> {
        let data = Self {
            name: self.name.trim().to_string(),
            email: normalize_email(&self.email),
        };
        data.validate()?;
        Ok(data)
    }
}

/// Data for updating an existing user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserChanges {
    /// New display name.
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub name: Option<String>,
    /// New email address.
    #[serde(default)]
    #[validate(
        email(message = "must be a valid email address"),
        length(max = 255, message = "must be at most 255 characters")
    )]
    pub email: Option<String>,
}

impl UserChanges {
    /// Same normalization as [`NewUser::normalized`] for the fields present.
    pub fn normalized(self) -> AppResult<Self> {
        let changes = Self {
            name: self.name.map(|name| name.trim().to_string()),
            email: self.email.as_deref().map(normalize_email),
        };
        changes.validate()?;
        Ok(changes)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
