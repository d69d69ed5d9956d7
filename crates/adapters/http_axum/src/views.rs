//! Whitelisted JSON views of stored records.
//!
//! Each view lists exactly the fields a client may see. Stored columns left
//! out here (`registered`, `created`, `upvote` on posts, `user_id`,
//! `post_id`) never reach the wire.

use serde::{Deserialize, Serialize};

use quill_domain::category::Category;
use quill_domain::comment::Comment;
use quill_domain::id::{CategoryId, CommentId, PostId, UserId};
use quill_domain::post::Post;
use quill_domain::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub description: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            description: user.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: PostId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub topic: String,
    pub body: String,
    pub tags: String,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            name: post.name,
            description: post.description,
            category: post.category,
            topic: post.topic,
            body: post.body,
            tags: post.tags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryView {
    pub id: CategoryId,
    pub name: String,
}

impl From<Category> for CategoryView {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: CommentId,
    pub title: String,
    pub body: String,
    pub upvote: i64,
    pub downvote: i64,
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            title: comment.title,
            body: comment.body,
            upvote: comment.upvote,
            downvote: comment.downvote,
        }
    }
}
