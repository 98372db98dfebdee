use core::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::PostSource;
use crate::entities::{ClassicalWork, Competition, NewPost, Post, PostId};
use crate::seed::STORE;
use crate::utils::next_post_id;

/// Serves the seed collections from memory, optionally after a delay.
pub struct MockApi {
    posts: Mutex<Vec<Post>>,
    latency: Option<Duration>,
}

impl MockApi {
    pub fn new(latency: Option<Duration>) -> Self {
        Self {
            posts: Mutex::new(STORE.posts.clone()),
            latency,
        }
    }

    async fn delay(&self) {
        if let Some(d) = self.latency {
            tokio::time::sleep(d).await;
        }
    }

    async fn update_likes(&self, id: PostId, f: impl FnOnce(u32) -> u32) -> bool {
        match self.posts.lock().await.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.likes = f(p.likes);
                true
            },
            None => false,
        }
    }

    pub async fn post_by_id(&self, id: PostId) -> Option<Post> {
        self.delay().await;

        self.posts.lock().await.iter().find(|p| p.id == id).cloned()
    }

    pub async fn classical_works(&self) -> Vec<ClassicalWork> {
        self.delay().await;

        STORE.classics.clone()
    }

    pub async fn competitions(&self) -> Vec<Competition> {
        self.delay().await;

        STORE.competitions.clone()
    }
}

impl Default for MockApi {
    fn default() -> Self { Self::new(None) }
}

#[async_trait]
impl PostSource for MockApi {
    async fn list_posts(&self) -> Vec<Post> {
        self.delay().await;

        self.posts.lock().await.clone()
    }

    async fn create_post(
        &self,
        NewPost {
            title,
            content,
            category,
            author,
        }: NewPost,
    ) -> Option<Post> {
        self.delay().await;

        let post = Post {
            id: next_post_id(),
            title,
            content,
            author,
            category,
            likes: 0,
            comments: vec![],
            created_at: Utc::now(),
        };

        self.posts.lock().await.insert(0, post.clone());
        Some(post)
    }

    async fn like_post(&self, id: PostId) -> bool {
        self.delay().await;

        self.update_likes(id, |n| n.saturating_add(1)).await
    }

    async fn unlike_post(&self, id: PostId) -> bool {
        self.delay().await;

        self.update_likes(id, |n| n.saturating_sub(1)).await
    }
}
