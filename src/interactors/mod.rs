pub mod post;

use anyhow::{anyhow, Error};

use crate::entities::PostId;
use crate::repositories::RepositoryError;
use crate::usecases::PostError;

fn post_err_fmt(id: PostId) -> impl FnOnce(RepositoryError) -> Error {
    move |e| match e {
        RepositoryError::NotFound => PostError::NotFound(id).into(),
        e => anyhow!("repository error: {}", e),
    }
}

fn repo_err_fmt(e: RepositoryError) -> Error { anyhow!("repository error: {}", e) }
