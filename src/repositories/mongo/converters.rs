use anyhow::anyhow;
use mongodb::error::{ErrorKind, Result as MongoResult, WriteFailure};

use super::{RepositoryError, Result as RepoResult};

const DUPLICATE_KEY: i32 = 11000;

pub fn convert_repo_err<T, E>(result: Result<T, E>) -> RepoResult<T>
where E: Sync + Send + ::std::error::Error + 'static {
    result.map_err(|e| RepositoryError::Internal(anyhow!(e)))
}

/// `Ok(false)` when the write collided with the unique post `id` index.
pub fn try_unique_check<T>(result: MongoResult<T>) -> RepoResult<bool> {
    let e = match result {
        Ok(_) => return Ok(true),
        Err(e) => e,
    };

    let duplicate = matches!(
        e.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(w)) if w.code == DUPLICATE_KEY
    );

    match duplicate {
        true => Ok(false),
        false => Err(RepositoryError::Internal(anyhow!(e))),
    }
}

pub fn convert_404_or<T>(option: Option<T>) -> RepoResult<T> { option.ok_or(RepositoryError::NotFound) }
