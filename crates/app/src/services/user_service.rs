//! User service: use-cases for managing users.

use quill_domain::error::{NotFoundError, QuillError};
use quill_domain::id::UserId;
use quill_domain::user::{NewUser, User};

use crate::ports::UserRepository;

/// Application service for user operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new user after checking required fields.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Validation`] if a required field is empty, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, user), fields(user_name = %user.name))]
    pub async fn create_user(&self, user: NewUser) -> Result<User, QuillError> {
        user.validate()?;
        let created = self.repo.create(user).await?;
        tracing::info!(id = %created.id, "user created");
        Ok(created)
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_user(&self, id: UserId) -> Result<User, QuillError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, QuillError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_domain::error::ValidationError;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryUserRepo {
        store: Mutex<Vec<User>>,
    }

    impl UserRepository for InMemoryUserRepo {
        fn create(&self, user: NewUser) -> impl Future<Output = Result<User, QuillError>> + Send {
            let mut store = self.store.lock().unwrap();
            let id = UserId::new(i64::try_from(store.len()).unwrap() + 1);
            let user = user.into_user(id);
            store.push(user.clone());
            async { Ok(user) }
        }

        fn get_by_id(
            &self,
            id: UserId,
        ) -> impl Future<Output = Result<Option<User>, QuillError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.iter().find(|u| u.id == id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<User>, QuillError>> + Send {
            let result = self.store.lock().unwrap().clone();
            async { Ok(result) }
        }
    }

    fn make_service() -> UserService<InMemoryUserRepo> {
        UserService::new(InMemoryUserRepo::default())
    }

    #[tokio::test]
    async fn should_create_user_when_valid() {
        let svc = make_service();

        let created = svc
            .create_user(NewUser::new("A", "a@x.com", "d"))
            .await
            .unwrap();
        assert!(created.id.get() > 0);

        let fetched = svc.get_user(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let svc = make_service();
        let result = svc.create_user(NewUser::new("", "a@x.com", "d")).await;
        assert!(matches!(
            result,
            Err(QuillError::Validation(ValidationError::EmptyField {
                field: "name"
            }))
        ));
        assert!(svc.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_user_missing() {
        let svc = make_service();
        let result = svc.get_user(UserId::new(99)).await;
        assert!(matches!(result, Err(QuillError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_users() {
        let svc = make_service();
        svc.create_user(NewUser::new("A", "a@x.com", ""))
            .await
            .unwrap();
        svc.create_user(NewUser::new("B", "b@x.com", ""))
            .await
            .unwrap();

        assert_eq!(svc.list_users().await.unwrap().len(), 2);
    }
}
