//! A category is a uniquely named label.

use crate::error::{QuillError, require};
use crate::id::CategoryId;

/// A persisted category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A category that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// # Errors
    ///
    /// Returns [`QuillError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), QuillError> {
        require("name", &self.name)?;
        Ok(())
    }

    #[must_use]
    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
        }
    }
}
