use alloc::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;

use super::{post_err_fmt, repo_err_fmt};
use crate::entities::{Comment, NewPost, Post};
use crate::repositories::PostRepository;
use crate::usecases::post::{comment, get, gets, like, submit, unlike};
use crate::usecases::PostError;
use crate::utils::{is_blank, next_post_id, LetChain};

pub struct PostGetsInteractor {
    pub post_repository: Arc<dyn PostRepository + Sync + Send>,
}
#[async_trait]
impl gets::Usecase for PostGetsInteractor {
    async fn handle(&self, gets::Input { query }: gets::Input) -> Result<gets::Output> {
        tracing::debug!(?query, "listing posts");

        self.post_repository
            .finds(query)
            .await
            .map_err(repo_err_fmt)?
            .let_(|posts| gets::Output { posts })
            .let_(Ok)
    }
}

pub struct PostGetInteractor {
    pub post_repository: Arc<dyn PostRepository + Sync + Send>,
}
#[async_trait]
impl get::Usecase for PostGetInteractor {
    async fn handle(&self, get::Input { post_id }: get::Input) -> Result<get::Output> {
        let post = self
            .post_repository
            .find(post_id)
            .await
            .map_err(post_err_fmt(post_id))?;

        Ok(get::Output { post })
    }
}

pub struct PostSubmitInteractor {
    pub post_repository: Arc<dyn PostRepository + Sync + Send>,
}
#[async_trait]
impl submit::Usecase for PostSubmitInteractor {
    async fn handle(
        &self,
        submit::Input {
            new_post:
                NewPost {
                    title,
                    content,
                    category,
                    author,
                },
        }: submit::Input,
    ) -> Result<submit::Output> {
        if is_blank(&title) || is_blank(&content) {
            return Err(PostError::Invalid("title and content are required").into());
        }

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

        let can_insert = self
            .post_repository
            .insert(post.clone())
            .await
            .map_err(repo_err_fmt)?;

        if !can_insert {
            bail!("post id duplicated: {}", post.id);
        }

        tracing::info!(id = post.id, category = %post.category, "post published");

        Ok(submit::Output { post })
    }
}

pub struct PostLikeInteractor {
    pub post_repository: Arc<dyn PostRepository + Sync + Send>,
}
#[async_trait]
impl like::Usecase for PostLikeInteractor {
    async fn handle(&self, like::Input { post_id }: like::Input) -> Result<like::Output> {
        let post = self
            .post_repository
            .insert_like(post_id)
            .await
            .map_err(post_err_fmt(post_id))?;

        Ok(like::Output { post })
    }
}

pub struct PostUnlikeInteractor {
    pub post_repository: Arc<dyn PostRepository + Sync + Send>,
}
#[async_trait]
impl unlike::Usecase for PostUnlikeInteractor {
    async fn handle(&self, unlike::Input { post_id }: unlike::Input) -> Result<unlike::Output> {
        let post = self
            .post_repository
            .delete_like(post_id)
            .await
            .map_err(post_err_fmt(post_id))?;

        Ok(unlike::Output { post })
    }
}

pub struct PostCommentInteractor {
    pub post_repository: Arc<dyn PostRepository + Sync + Send>,
}
#[async_trait]
impl comment::Usecase for PostCommentInteractor {
    async fn handle(
        &self,
        comment::Input {
            post_id,
            user,
            text,
        }: comment::Input,
    ) -> Result<comment::Output> {
        if is_blank(&text) {
            return Err(PostError::Invalid("comment text is required").into());
        }

        let comment = Comment {
            id: next_post_id(),
            user,
            text,
            created_at: Utc::now(),
        };

        let post = self
            .post_repository
            .insert_comment(post_id, comment)
            .await
            .map_err(post_err_fmt(post_id))?;

        Ok(comment::Output { post })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Category;
    use crate::repositories::mock::InMemoryRepository;
    use crate::repositories::PostQuery;
    use crate::seed::authors;

    fn repo() -> Arc<dyn PostRepository + Sync + Send> { Arc::new(InMemoryRepository::seeded()) }

    fn new_post(title: &str, content: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: content.to_string(),
            category: Category::Kavithai,
            author: authors::reader(),
        }
    }

    #[tokio::test]
    async fn submit_assigns_server_fields_and_lists_first() {
        let post_repository = repo();
        let submit = PostSubmitInteractor {
            post_repository: post_repository.clone(),
        };
        let gets = PostGetsInteractor { post_repository };

        let submit::Output { post } = submit::Usecase::handle(&submit, submit::Input {
            new_post: new_post("புதிய கவிதை", "வரிகள்"),
        })
        .await
        .unwrap();

        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());

        let gets::Output { posts } = gets::Usecase::handle(&gets, gets::Input {
            query: PostQuery::default(),
        })
        .await
        .unwrap();
        assert_eq!(posts[0].id, post.id);
    }

    #[tokio::test]
    async fn submit_rejects_blank_fields() {
        let submit = PostSubmitInteractor {
            post_repository: repo(),
        };

        let err = submit::Usecase::handle(&submit, submit::Input {
            new_post: new_post("  ", "வரிகள்"),
        })
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PostError>(),
            Some(PostError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn missing_post_is_typed_not_found() {
        let like = PostLikeInteractor {
            post_repository: repo(),
        };

        let err = like::Usecase::handle(&like, like::Input { post_id: 42 })
            .await
            .unwrap_err();

        assert_eq!(err.downcast_ref::<PostError>(), Some(&PostError::NotFound(42)));
    }

    #[tokio::test]
    async fn like_then_unlike_restores_count() {
        let post_repository = repo();
        let like = PostLikeInteractor {
            post_repository: post_repository.clone(),
        };
        let unlike = PostUnlikeInteractor { post_repository };

        let id = crate::seed::STORE.posts[0].id;
        let before = crate::seed::STORE.posts[0].likes;

        let liked = like::Usecase::handle(&like, like::Input { post_id: id })
            .await
            .unwrap();
        assert_eq!(liked.post.likes, before + 1);

        let unliked = unlike::Usecase::handle(&unlike, unlike::Input { post_id: id })
            .await
            .unwrap();
        assert_eq!(unliked.post.likes, before);
    }

    #[tokio::test]
    async fn comment_is_appended() {
        let interactor = PostCommentInteractor {
            post_repository: repo(),
        };
        let id = crate::seed::STORE.posts[0].id;

        let comment::Output { post } = comment::Usecase::handle(&interactor, comment::Input {
            post_id: id,
            user: authors::reader(),
            text: "அருமை".to_string(),
        })
        .await
        .unwrap();

        assert_eq!(post.comments.last().unwrap().text, "அருமை");
    }
}
