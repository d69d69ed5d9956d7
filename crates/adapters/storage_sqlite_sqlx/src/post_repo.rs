//! `SQLite` implementation of [`PostRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use quill_app::ports::PostRepository;
use quill_domain::error::{ConflictError, QuillError};
use quill_domain::id::{PostId, UserId};
use quill_domain::post::{NewPost, Post};
use quill_domain::time;

use crate::error::{StorageError, map_write_error};
use crate::timestamp;

/// Wrapper for converting database rows into domain [`Post`].
struct Wrapper(Post);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Post> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let registered: String = row.try_get("registered")?;
        let user_id: Option<i64> = row.try_get("user_id")?;

        Ok(Self(Post {
            id: PostId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            topic: row.try_get("topic")?,
            body: row.try_get("body")?,
            tags: row.try_get("tags")?,
            upvote: row.try_get("upvote")?,
            registered: timestamp::decode(&registered)?,
            user_id: user_id.map(UserId::new),
        }))
    }
}

const INSERT: &str = "INSERT INTO posts (name, description, category, topic, body, tags, registered) VALUES (?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM posts WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM posts";
const UPDATE: &str = "UPDATE posts SET name = ?, description = ?, category = ?, topic = ?, body = ?, tags = ? WHERE id = ?";

fn name_taken(name: &str) -> ConflictError {
    ConflictError {
        entity: "Post",
        field: "name",
        value: name.to_string(),
    }
}

/// `SQLite`-backed post repository.
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PostRepository for SqlitePostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, QuillError> {
        let registered = time::now();

        let result = sqlx::query(INSERT)
            .bind(&post.name)
            .bind(&post.description)
            .bind(&post.category)
            .bind(&post.topic)
            .bind(&post.body)
            .bind(&post.tags)
            .bind(timestamp::encode(registered))
            .execute(&self.pool)
            .await
            .map_err(|err| map_write_error(err, || name_taken(&post.name)))?;

        Ok(post.into_post(PostId::new(result.last_insert_rowid()), registered))
    }

    async fn get_by_id(&self, id: PostId) -> Result<Option<Post>, QuillError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Post>, QuillError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, id: PostId, changes: NewPost) -> Result<Option<Post>, QuillError> {
        let result = sqlx::query(UPDATE)
            .bind(&changes.name)
            .bind(&changes.description)
            .bind(&changes.category)
            .bind(&changes.topic)
            .bind(&changes.body)
            .bind(&changes.tags)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|err| map_write_error(err, || name_taken(&changes.name)))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }
}
