//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crudhub_core::traits::Resource;
use crudhub_core::types::form::{FieldKind, FormField, FormSchema};
use crudhub_core::types::id::CategoryId;
use crudhub_core::{AppError, AppResult};

use super::slug::slugify;

/// A category that content can be filed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Human-readable name.
    pub name: String,
    /// URL slug, unique across categories.
    pub slug: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Build a fresh record from a store payload.
    pub fn from_new(data: NewCategory, now: DateTime<Utc>) -> AppResult<Self> {
        let data = data.normalized()?;
        Ok(Self {
            id: CategoryId::new(),
            name: data.name,
            slug: data.slug.unwrap_or_default(),
            description: data.description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a put payload in place.
    pub fn apply(&mut self, changes: CategoryChanges, now: DateTime<Utc>) -> AppResult<()> {
        let changes = changes.normalized()?;
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(slug) = changes.slug {
            self.slug = slug;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        self.updated_at = now;
        Ok(())
    }
}

impl Resource for Category {
    const NAME: &'static str = "categories";

    fn form_schema() -> FormSchema {
        FormSchema::new(
            Self::NAME,
            vec![
                FormField::required("name", FieldKind::Text).max_length(255),
                FormField::optional("slug", FieldKind::Text).max_length(255),
                FormField::optional("description", FieldKind::Textarea),
            ],
        )
    }
}

/// Data required to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCategory {
    /// Human-readable name.
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub name: String,
    /// Explicit slug; derived from `name` when absent.
    #[serde(default)]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub slug: Option<String>,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

impl NewCategory {
    /// Trim the name and resolve the slug.
    ///
    /// The returned value always carries `Some(slug)`.
    pub fn normalized(self) -> AppResult<Self> {
        let name = self.name.trim().to_string();
        let slug = match self.slug.as_deref() {
            Some(slug) => checked_slug(slug)?,
            None if name.is_empty() => String::new(),
            None => checked_slug(&name)?,
        };
        let data = Self {
            name,
            slug: Some(slug),
            description: self.description,
        };
        data.validate()?;
        Ok(data)
    }
}

/// Data for updating an existing category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CategoryChanges {
    /// New name. The slug is left alone unless given explicitly.
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub name: Option<String>,
    /// New slug.
    #[serde(default)]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub slug: Option<String>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
}

impl CategoryChanges {
    /// Trim the name and normalize the slug, if present.
    pub fn normalized(self) -> AppResult<Self> {
        let changes = Self {
            name: self.name.map(|name| name.trim().to_string()),
            slug: self.slug.as_deref().map(checked_slug).transpose()?,
            description: self.description,
        };
        changes.validate()?;
        Ok(changes)
    }
}

fn checked_slug(source: &str) -> AppResult<String> {
    let slug = slugify(source);
    if slug.is_empty() {
        return Err(AppError::validation(format!(
            "Cannot derive a slug from '{source}'"
        )));
    }
    Ok(slug)
}
