//! # quill-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository`: create and look up users
//!   - `PostRepository`: create, look up, list and replace posts
//!   - `CategoryRepository`: create, look up and list categories
//!   - `CommentRepository`: create, look up and list comments
//! - Define **driving/inbound ports** as use-case structs:
//!   - `UserService`, `PostService`, `CategoryService`, `CommentService`
//! - Turn absent lookups into typed not-found errors
//!
//! ## Dependency rule
//! Depends on `quill-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
