//! # quill-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `quill-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Apply the embedded schema (sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Translate unique-constraint violations into domain conflicts
//!
//! ## Dependency rule
//! Depends on `quill-app` (for port traits) and `quill-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod timestamp;

mod category_repo;
mod comment_repo;
mod post_repo;
mod user_repo;

pub use category_repo::SqliteCategoryRepository;
pub use comment_repo::SqliteCommentRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use post_repo::SqlitePostRepository;
pub use user_repo::SqliteUserRepository;
