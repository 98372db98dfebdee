//! Read-only seed catalogue: classical works and competitions.

use actix_web::{web, HttpResponse};

use super::error::{ApiError, Result};
use crate::seed::STORE;

pub async fn classics() -> HttpResponse { HttpResponse::Ok().json(&STORE.classics) }

pub async fn classic(path: web::Path<String>) -> Result<HttpResponse> {
    let id = path.into_inner();

    match STORE.classic(&id) {
        Some(work) => Ok(HttpResponse::Ok().json(work)),
        None => Err(ApiError::NotFound(format!("cannot find work: {}", id))),
    }
}

pub async fn competitions() -> HttpResponse { HttpResponse::Ok().json(&STORE.competitions) }

pub async fn health() -> HttpResponse { HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })) }
