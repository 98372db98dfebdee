use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{PostQuery, PostRepository, RepositoryError, Result};
use crate::entities::{Comment, Post, PostId};
use crate::filters::TextMatcher;

mod helpers;

use helpers::{find_mut, find_ref};

pub struct InMemoryRepository<T>(Mutex<Vec<T>>);

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self { Self(Mutex::new(vec![])) }

    pub fn with(items: Vec<T>) -> Self { Self(Mutex::new(items)) }
}
impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self { Self::new() }
}

impl InMemoryRepository<Post> {
    /// Starts from the bundled seed posts.
    pub fn seeded() -> Self { Self::with(crate::seed::STORE.posts.clone()) }
}

#[async_trait]
impl PostRepository for InMemoryRepository<Post> {
    async fn insert(&self, item: Post) -> Result<bool> {
        let mut guard = self.0.lock().await;

        match find_ref(&guard, |v| v.id == item.id) {
            Ok(_) => return Ok(false),
            Err(RepositoryError::NotFound) => (),
            Err(e) => return Err(e),
        }

        guard.push(item);
        Ok(true)
    }

    async fn find(&self, id: PostId) -> Result<Post> {
        let guard = self.0.lock().await;

        Ok(find_ref(&guard, |v| v.id == id)?.clone())
    }

    async fn finds(
        &self,
        PostQuery {
            category,
            author,
            text,
        }: PostQuery,
    ) -> Result<Vec<Post>> {
        let matcher = TextMatcher::new(text.as_deref().unwrap_or_default());

        let mut res = self
            .0
            .lock()
            .await
            .iter()
            .filter(|p| category.map(|c| p.category == c).unwrap_or(true))
            .filter(|p| author.map(|id| p.author.id == id).unwrap_or(true))
            .filter(|p| matcher.matches_post(p))
            .cloned()
            .collect::<Vec<_>>();

        res.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(res)
    }

    async fn insert_like(&self, id: PostId) -> Result<Post> {
        let mut guard = self.0.lock().await;
        let item = find_mut(&mut guard, |p| p.id == id)?;

        item.likes = item.likes.saturating_add(1);
        Ok(item.clone())
    }

    async fn delete_like(&self, id: PostId) -> Result<Post> {
        let mut guard = self.0.lock().await;
        let item = find_mut(&mut guard, |p| p.id == id)?;

        item.likes = item.likes.saturating_sub(1);
        Ok(item.clone())
    }

    async fn insert_comment(&self, id: PostId, comment: Comment) -> Result<Post> {
        let mut guard = self.0.lock().await;
        let item = find_mut(&mut guard, |p| p.id == id)?;

        item.comments.push(comment);
        Ok(item.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::entities::Category;
    use crate::seed::authors;

    fn post(id: PostId, category: Category) -> Post {
        Post {
            id,
            title: format!("title {}", id),
            content: "உள்ளடக்கம்".to_string(),
            author: authors::reader(),
            category,
            likes: 0,
            comments: vec![],
            created_at: crate::utils::date_from_millis(id),
        }
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_id() {
        let repo = InMemoryRepository::new();

        assert!(repo.insert(post(1, Category::Kathai)).await.unwrap());
        assert!(!repo.insert(post(1, Category::Kavithai)).await.unwrap());
        assert_eq!(repo.find(1).await.unwrap().category, Category::Kathai);
    }

    #[tokio::test]
    async fn finds_sorts_newest_first_and_filters() {
        let repo = InMemoryRepository::with(vec![
            post(10, Category::Kathai),
            post(30, Category::Kavithai),
            post(20, Category::Kathai),
        ]);

        let all = repo.finds(PostQuery::default()).await.unwrap();
        assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), [30, 20, 10]);

        let stories = repo
            .finds(PostQuery {
                category: Some(Category::Kathai),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(stories.iter().map(|p| p.id).collect::<Vec<_>>(), [20, 10]);

        let titled = repo
            .finds(PostQuery {
                text: Some("TITLE 3".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(titled.len(), 1);
    }

    #[tokio::test]
    async fn likes_never_go_negative() {
        let repo = InMemoryRepository::with(vec![post(1, Category::Kathai)]);

        assert_eq!(repo.delete_like(1).await.unwrap().likes, 0);
        assert_eq!(repo.insert_like(1).await.unwrap().likes, 1);
        assert_eq!(repo.delete_like(1).await.unwrap().likes, 0);
        assert!(matches!(
            repo.insert_like(2).await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn comments_append_in_order() {
        let repo = InMemoryRepository::with(vec![post(1, Category::Kathai)]);

        for (id, text) in [(1, "முதல்"), (2, "இரண்டாம்")] {
            let comment = Comment {
                id,
                user: authors::reader(),
                text: text.to_string(),
                created_at: Utc::now(),
            };
            repo.insert_comment(1, comment).await.unwrap();
        }

        let post = repo.find(1).await.unwrap();
        assert_eq!(
            post.comments.iter().map(|c| c.text.as_str()).collect::<Vec<_>>(),
            ["முதல்", "இரண்டாம்"]
        );
    }
}
