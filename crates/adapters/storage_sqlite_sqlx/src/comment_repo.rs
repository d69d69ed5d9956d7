//! `SQLite` implementation of [`CommentRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use quill_app::ports::CommentRepository;
use quill_domain::comment::{Comment, NewComment};
use quill_domain::error::QuillError;
use quill_domain::id::{CommentId, PostId, UserId};
use quill_domain::time;

use crate::error::StorageError;
use crate::timestamp;

/// Wrapper for converting database rows into domain [`Comment`].
struct Wrapper(Comment);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let created: String = row.try_get("created")?;
        let user_id: Option<i64> = row.try_get("user_id")?;
        let post_id: Option<i64> = row.try_get("post_id")?;

        Ok(Self(Comment {
            id: CommentId::new(row.try_get("id")?),
            title: row.try_get("title")?,
            body: row.try_get("body")?,
            created: timestamp::decode(&created)?,
            user_id: user_id.map(UserId::new),
            post_id: post_id.map(PostId::new),
            upvote: row.try_get("upvote")?,
            downvote: row.try_get("downvote")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO comments (title, body, created, upvote, downvote) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM comments WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM comments";

/// `SQLite`-backed comment repository.
pub struct SqliteCommentRepository {
    pool: SqlitePool,
}

impl SqliteCommentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CommentRepository for SqliteCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, QuillError> {
        let created = time::now();

        let result = sqlx::query(INSERT)
            .bind(&comment.title)
            .bind(&comment.body)
            .bind(timestamp::encode(created))
            .bind(comment.upvote)
            .bind(comment.downvote)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(comment.into_comment(CommentId::new(result.last_insert_rowid()), created))
    }

    async fn get_by_id(&self, id: CommentId) -> Result<Option<Comment>, QuillError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<Comment>, QuillError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
