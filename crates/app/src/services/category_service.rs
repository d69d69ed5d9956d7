//! Category service: use-cases for managing categories.

use quill_domain::category::{Category, NewCategory};
use quill_domain::error::{NotFoundError, QuillError};
use quill_domain::id::CategoryId;

use crate::ports::CategoryRepository;

/// Application service for category operations.
pub struct CategoryService<R> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new category.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Validation`] for an empty name,
    /// [`QuillError::Conflict`] if the name is taken, or a storage error.
    #[tracing::instrument(skip(self, category), fields(category_name = %category.name))]
    pub async fn create_category(&self, category: NewCategory) -> Result<Category, QuillError> {
        category.validate()?;
        let created = self.repo.create(category).await?;
        tracing::info!(id = %created.id, "category created");
        Ok(created)
    }

    /// Look up a category by id.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::NotFound`] when no category with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_category(&self, id: CategoryId) -> Result<Category, QuillError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Category",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_categories(&self) -> Result<Vec<Category>, QuillError> {
        self.repo.get_all().await
    }
}
