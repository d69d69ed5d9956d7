//! # quill-domain
//!
//! Pure domain model for the quill blogging API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Users** (authors with a name, email and description)
//! - Define **Posts** (titled articles with free-text category, topic and tags)
//! - Define **Categories** (uniquely named labels)
//! - Define **Comments** (titled remarks with up/down vote counters)
//! - Enforce the presence checks each draft must satisfy before it is stored
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod category;
pub mod comment;
pub mod post;
pub mod user;
