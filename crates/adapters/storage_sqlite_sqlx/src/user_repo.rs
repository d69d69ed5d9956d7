//! `SQLite` implementation of [`UserRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use quill_app::ports::UserRepository;
use quill_domain::error::QuillError;
use quill_domain::id::UserId;
use quill_domain::user::{NewUser, User};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: UserId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            description: row.try_get("description")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (name, email, description) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, email, description FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, email, description FROM users";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, QuillError> {
        let result = sqlx::query(INSERT)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.description)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(user.into_user(UserId::new(result.last_insert_rowid())))
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, QuillError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<User>, QuillError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
