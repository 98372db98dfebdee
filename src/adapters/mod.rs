//! Where the app gets its posts from: the REST backend or an in-memory twin.

use alloc::sync::Arc;
use core::time::Duration;

use async_trait::async_trait;

use crate::entities::{NewPost, Post, PostId};

pub mod mock;
pub mod remote;

pub use mock::MockApi;
pub use remote::RemotePostSource;

/// Fixed at build time; the app reads it once when constructed.
pub const USE_REAL_DB: bool = false;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub use_real_db: bool,
    pub api_url: String,
    pub mock_latency: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            use_real_db: USE_REAL_DB,
            api_url: DEFAULT_API_URL.to_string(),
            mock_latency: None,
        }
    }
}

/// Failures never surface as errors: they degrade to `[]`, `None` or `false`.
#[async_trait]
pub trait PostSource {
    async fn list_posts(&self) -> Vec<Post>;
    async fn create_post(&self, post: NewPost) -> Option<Post>;
    async fn like_post(&self, id: PostId) -> bool;
    async fn unlike_post(&self, id: PostId) -> bool;
}

pub fn post_source(config: &ClientConfig, mock: Arc<MockApi>) -> Arc<dyn PostSource + Sync + Send> {
    if config.use_real_db {
        return Arc::new(RemotePostSource::new(&config.api_url));
    }

    mock
}
