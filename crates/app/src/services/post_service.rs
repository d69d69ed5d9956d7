//! Post service: use-cases for managing posts.

use quill_domain::error::{NotFoundError, QuillError};
use quill_domain::id::PostId;
use quill_domain::post::{NewPost, Post};

use crate::ports::PostRepository;

/// Application service for post operations.
pub struct PostService<R> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new post after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Validation`] if invariants fail,
    /// [`QuillError::Conflict`] if the name is already used, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, post), fields(post_name = %post.name))]
    pub async fn create_post(&self, post: NewPost) -> Result<Post, QuillError> {
        post.validate()?;
        let created = self.repo.create(post).await?;
        tracing::info!(id = %created.id, "post created");
        Ok(created)
    }

    /// Look up a post by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::NotFound`] when no post with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_post(&self, id: PostId) -> Result<Post, QuillError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all posts.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_posts(&self) -> Result<Vec<Post>, QuillError> {
        self.repo.get_all().await
    }

    /// Replace every mutable field of an existing post.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Validation`] if invariants fail,
    /// [`QuillError::NotFound`] when no post with `id` exists,
    /// [`QuillError::Conflict`] if the new name belongs to another post, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_post(&self, id: PostId, changes: NewPost) -> Result<Post, QuillError> {
        changes.validate()?;
        let updated = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("post updated");
        Ok(updated)
    }
}

fn not_found(id: PostId) -> QuillError {
    NotFoundError {
        entity: "Post",
        id: id.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_domain::error::{ConflictError, ValidationError};
    use quill_domain::time::now;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPostRepo {
        store: Mutex<BTreeMap<PostId, Post>>,
    }

    fn conflict(name: &str) -> QuillError {
        ConflictError {
            entity: "Post",
            field: "name",
            value: name.to_string(),
        }
        .into()
    }

    impl PostRepository for InMemoryPostRepo {
        fn create(&self, post: NewPost) -> impl Future<Output = Result<Post, QuillError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = if store.values().any(|p| p.name == post.name) {
                Err(conflict(&post.name))
            } else {
                let id = PostId::new(i64::try_from(store.len()).unwrap() + 1);
                let post = post.into_post(id, now());
                store.insert(id, post.clone());
                Ok(post)
            };
            async { result }
        }

        fn get_by_id(
            &self,
            id: PostId,
        ) -> impl Future<Output = Result<Option<Post>, QuillError>> + Send {
            let result = self.store.lock().unwrap().get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Post>, QuillError>> + Send {
            let result: Vec<Post> = self.store.lock().unwrap().values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            id: PostId,
            changes: NewPost,
        ) -> impl Future<Output = Result<Option<Post>, QuillError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = if store
                .values()
                .any(|p| p.id != id && p.name == changes.name)
            {
                Err(conflict(&changes.name))
            } else {
                Ok(store.get_mut(&id).map(|existing| {
                    let replaced = changes.into_post(id, existing.registered);
                    *existing = replaced.clone();
                    replaced
                }))
            };
            async { result }
        }
    }

    fn make_service() -> PostService<InMemoryPostRepo> {
        PostService::new(InMemoryPostRepo::default())
    }

    fn draft(name: &str) -> NewPost {
        NewPost::builder()
            .name(name)
            .description("desc")
            .category("rust")
            .topic("async")
            .body("body")
            .tags("a,b")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_post_when_valid() {
        let svc = make_service();
        let created = svc.create_post(draft("Hello")).await.unwrap();

        let fetched = svc.get_post(created.id).await.unwrap();
        assert_eq!(fetched.name, "Hello");
        assert_eq!(fetched.tags, "a,b");
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_blank() {
        let svc = make_service();
        let mut post = draft("Hello");
        post.name = "  ".to_string();

        let result = svc.create_post(post).await;
        assert!(matches!(
            result,
            Err(QuillError::Validation(ValidationError::EmptyField { .. }))
        ));
    }

    #[tokio::test]
    async fn should_propagate_conflict_when_name_is_taken() {
        let svc = make_service();
        svc.create_post(draft("Hello")).await.unwrap();

        let result = svc.create_post(draft("Hello")).await;
        assert!(matches!(result, Err(QuillError::Conflict(_))));
        assert_eq!(svc.list_posts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_post_missing() {
        let svc = make_service();
        let result = svc.get_post(PostId::new(1)).await;
        assert!(matches!(result, Err(QuillError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_replace_all_fields_when_updating() {
        let svc = make_service();
        let created = svc.create_post(draft("Hello")).await.unwrap();

        let changes = NewPost::builder()
            .name("Renamed")
            .description("new desc")
            .category("go")
            .topic("gc")
            .body("new body")
            .tags("c")
            .build()
            .unwrap();
        let updated = svc.update_post(created.id, changes).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.category, "go");
        assert_eq!(updated.registered, created.registered);

        let fetched = svc.get_post(created.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_post() {
        let svc = make_service();
        let result = svc.update_post(PostId::new(7), draft("Hello")).await;
        assert!(matches!(result, Err(QuillError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_allow_update_that_keeps_same_name() {
        let svc = make_service();
        let created = svc.create_post(draft("Hello")).await.unwrap();

        let mut changes = draft("Hello");
        changes.body = "edited".to_string();
        let updated = svc.update_post(created.id, changes).await.unwrap();
        assert_eq!(updated.body, "edited");
    }
}
