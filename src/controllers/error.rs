use core::fmt;

use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use crate::usecases::PostError;

pub type Result<T> = ::std::result::Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(m) | ApiError::NotFound(m) | ApiError::Internal(m) => f.write_str(m),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "message": self.to_string(),
        }))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast_ref::<PostError>() {
            Some(PostError::NotFound(_)) => ApiError::NotFound(e.to_string()),
            Some(PostError::Invalid(_)) => ApiError::BadRequest(e.to_string()),
            None => {
                tracing::error!(error = %e, "request failed");
                ApiError::Internal("internal server error".to_string())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_errors_map_to_status() {
        let not_found: ApiError = anyhow::Error::from(PostError::NotFound(3)).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let invalid: ApiError = anyhow::Error::from(PostError::Invalid("empty")).into();
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let other: ApiError = anyhow::anyhow!("mongo down").into();
        assert_eq!(other.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!other.to_string().contains("mongo"));
    }
}
