//! # quill-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** over users, posts, categories and comments
//!   (`/user`, `/post`, `/category`, `/comment`)
//! - Parse request bodies into typed request structs and reject malformed
//!   ones with a structured `400`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Shape records into their whitelisted JSON views
//! - Map domain errors onto status codes (`400`, `404`, `409`, `500`)
//!
//! ## Dependency rule
//! Depends on `quill-app` (for port traits and services) and `quill-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
pub mod views;
