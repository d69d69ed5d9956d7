//! `SQLite` implementation of [`CategoryRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use quill_app::ports::CategoryRepository;
use quill_domain::category::{Category, NewCategory};
use quill_domain::error::{ConflictError, QuillError};
use quill_domain::id::CategoryId;

use crate::error::{StorageError, map_write_error};

struct Wrapper(Category);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Category {
            id: CategoryId::new(row.try_get("id")?),
            name: row.try_get("name")?,
        }))
    }
}

/// `SQLite`-backed category repository.
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CategoryRepository for SqliteCategoryRepository {
    async fn create(&self, category: NewCategory) -> Result<Category, QuillError> {
        let result = sqlx::query("INSERT INTO categories (name) VALUES (?)")
            .bind(&category.name)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                map_write_error(err, || ConflictError {
                    entity: "Category",
                    field: "name",
                    value: category.name.clone(),
                })
            })?;

        Ok(category.into_category(CategoryId::new(result.last_insert_rowid())))
    }

    async fn get_by_id(&self, id: CategoryId) -> Result<Option<Category>, QuillError> {
        let row: Option<Wrapper> = sqlx::query_as("SELECT id, name FROM categories WHERE id = ?")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;
        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<Category>, QuillError> {
        let rows: Vec<Wrapper> = sqlx::query_as("SELECT id, name FROM categories")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
