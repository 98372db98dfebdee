use async_trait::async_trait;

use crate::entities::{Category, Comment, Post, PostId, UserId};

pub mod mock;
pub mod mongo;

type Result<T> = ::std::result::Result<T, RepositoryError>;

#[async_trait]
pub trait PostRepository {
    /// `Ok(false)` when a post with the same id already exists.
    async fn insert(&self, item: Post) -> Result<bool>;

    async fn find(&self, id: PostId) -> Result<Post>;
    /// Newest first (`created_at` descending).
    async fn finds(&self, query: PostQuery) -> Result<Vec<Post>>;

    async fn insert_like(&self, id: PostId) -> Result<Post>;
    /// Never takes `likes` below zero.
    async fn delete_like(&self, id: PostId) -> Result<Post>;

    async fn insert_comment(&self, id: PostId, comment: Comment) -> Result<Post>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub category: Option<Category>,
    pub author: Option<UserId>,
    /// Literal, case-insensitive match against title or content.
    pub text: Option<String>,
}

#[derive(Debug)]
pub enum RepositoryError {
    NotFound,
    NoUnique { matched: u32 },
    Internal(anyhow::Error),
}

impl ::std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            RepositoryError::NotFound => write!(f, "cannot find object."),
            RepositoryError::NoUnique { matched } => write!(
                f,
                "expected unique object, found non-unique objects (matched: {})",
                matched
            ),
            RepositoryError::Internal(e) => write!(f, "internal error: {}", e),
        }
    }
}

impl ::std::error::Error for RepositoryError {}
