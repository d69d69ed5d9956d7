//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod category_service;
pub mod comment_service;
pub mod post_service;
pub mod user_service;
