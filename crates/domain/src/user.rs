//! A user is an author known to the blog.

use crate::error::{QuillError, require};
use crate::id::UserId;

/// A persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub description: String,
}

/// Client-supplied fields of a user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub description: String,
}

impl NewUser {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            description: description.into(),
        }
    }

    /// Check presence of the fields a user cannot do without.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Validation`] when `name` or `email` is empty.
    pub fn validate(&self) -> Result<(), QuillError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        Ok(())
    }

    /// Attach the id assigned by the store.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            description: self.description,
        }
    }
}
