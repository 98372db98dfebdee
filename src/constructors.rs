use alloc::sync::Arc;

use crate::controllers::PostController;
use crate::interactors::post::{
    PostCommentInteractor, PostGetInteractor, PostGetsInteractor, PostLikeInteractor,
    PostSubmitInteractor, PostUnlikeInteractor,
};
use crate::repositories::mock::InMemoryRepository;
use crate::repositories::mongo::MongoPostRepository;
use crate::repositories::PostRepository;

pub fn post_controller(post_repository: Arc<dyn PostRepository + Sync + Send>) -> PostController {
    PostController {
        gets: Arc::new(PostGetsInteractor {
            post_repository: post_repository.clone(),
        }),
        get: Arc::new(PostGetInteractor {
            post_repository: post_repository.clone(),
        }),
        submit: Arc::new(PostSubmitInteractor {
            post_repository: post_repository.clone(),
        }),
        like: Arc::new(PostLikeInteractor {
            post_repository: post_repository.clone(),
        }),
        unlike: Arc::new(PostUnlikeInteractor {
            post_repository: post_repository.clone(),
        }),
        comment: Arc::new(PostCommentInteractor { post_repository }),
    }
}

/// Seeded in-memory store; contents are lost on exit.
pub fn in_memory() -> PostController { post_controller(Arc::new(InMemoryRepository::seeded())) }

pub async fn mongo(uri_str: impl AsRef<str>, db_name: impl AsRef<str>) -> ::anyhow::Result<PostController> {
    let c = ::mongodb::Client::with_uri_str(uri_str).await?;
    let db = c.database(db_name.as_ref());

    let repo = MongoPostRepository::new_with(db).await?;

    Ok(post_controller(Arc::new(repo)))
}
