use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::PostSource;
use crate::entities::{NewPost, Post, PostId};

/// JSON client for the `/api` surface served by this crate's backend.
pub struct RemotePostSource {
    client: Client,
    base_url: String,
}

impl RemotePostSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    /// `action` is the last path segment: `like` or `unlike`.
    async fn vote(&self, id: PostId, action: &str) -> bool {
        let url = self.url(&format!("/posts/{}/{}", id, action));

        match self.client.post(url).send().await {
            Ok(resp) if resp.status().is_success() => true,
            Ok(resp) => {
                tracing::warn!(status = %resp.status(), id, action, "vote rejected");
                false
            },
            Err(e) => {
                tracing::warn!(error = %e, id, action, "cannot send vote");
                false
            },
        }
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> reqwest::Result<T> {
        resp.error_for_status()?.json::<T>().await
    }
}

#[async_trait]
impl PostSource for RemotePostSource {
    async fn list_posts(&self) -> Vec<Post> {
        let res = match self.client.get(self.url("/posts")).send().await {
            Ok(resp) => Self::read_json::<Vec<Post>>(resp).await,
            Err(e) => Err(e),
        };

        match res {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(error = %e, "cannot fetch posts");
                vec![]
            },
        }
    }

    async fn create_post(&self, post: NewPost) -> Option<Post> {
        let res = match self.client.post(self.url("/posts")).json(&post).send().await {
            Ok(resp) => Self::read_json::<Post>(resp).await,
            Err(e) => Err(e),
        };

        match res {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!(error = %e, "cannot create post");
                None
            },
        }
    }

    async fn like_post(&self, id: PostId) -> bool { self.vote(id, "like").await }

    async fn unlike_post(&self, id: PostId) -> bool { self.vote(id, "unlike").await }
}
