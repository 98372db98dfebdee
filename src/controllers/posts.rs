use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::error::Result;
use super::PostController;
use crate::entities::{Category, NewPost, PostId, User, UserId};
use crate::repositories::PostQuery;
use crate::usecases::post::{comment, get, gets, like, submit, unlike};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub author: Option<UserId>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub user: User,
    pub text: String,
}

async fn list_by(c: &PostController, query: PostQuery) -> Result<HttpResponse> {
    let gets::Output { posts } = c.gets.handle(gets::Input { query }).await?;

    Ok(HttpResponse::Ok().json(posts))
}

pub async fn list(c: web::Data<PostController>, params: web::Query<ListParams>) -> Result<HttpResponse> {
    let ListParams {
        q,
        author,
        category,
    } = params.into_inner();

    let category = match category.map(|c| c.parse::<Category>()) {
        Some(Ok(c)) => Some(c),
        Some(Err(_)) => return Ok(HttpResponse::Ok().json(Vec::<()>::new())),
        None => None,
    };

    list_by(&c, PostQuery {
        category,
        author,
        text: q,
    })
    .await
}

/// Unknown labels yield an empty list rather than an error.
pub async fn by_category(c: web::Data<PostController>, path: web::Path<String>) -> Result<HttpResponse> {
    let label = path.into_inner();

    match label.parse::<Category>() {
        Ok(category) => {
            list_by(&c, PostQuery {
                category: Some(category),
                ..Default::default()
            })
            .await
        },
        Err(e) => {
            tracing::debug!(%e, "category lookup");
            Ok(HttpResponse::Ok().json(Vec::<()>::new()))
        },
    }
}

pub async fn by_author(c: web::Data<PostController>, path: web::Path<UserId>) -> Result<HttpResponse> {
    list_by(&c, PostQuery {
        author: Some(path.into_inner()),
        ..Default::default()
    })
    .await
}

pub async fn get(c: web::Data<PostController>, path: web::Path<PostId>) -> Result<HttpResponse> {
    let get::Output { post } = c
        .get
        .handle(get::Input {
            post_id: path.into_inner(),
        })
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

pub async fn create(c: web::Data<PostController>, body: web::Json<NewPost>) -> Result<HttpResponse> {
    let submit::Output { post } = c
        .submit
        .handle(submit::Input {
            new_post: body.into_inner(),
        })
        .await?;

    Ok(HttpResponse::Created().json(post))
}

pub async fn like(c: web::Data<PostController>, path: web::Path<PostId>) -> Result<HttpResponse> {
    let like::Output { post } = c
        .like
        .handle(like::Input {
            post_id: path.into_inner(),
        })
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

pub async fn unlike(c: web::Data<PostController>, path: web::Path<PostId>) -> Result<HttpResponse> {
    let unlike::Output { post } = c
        .unlike
        .handle(unlike::Input {
            post_id: path.into_inner(),
        })
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

pub async fn comment(
    c: web::Data<PostController>,
    path: web::Path<PostId>,
    body: web::Json<CommentRequest>,
) -> Result<HttpResponse> {
    let CommentRequest { user, text } = body.into_inner();

    let comment::Output { post } = c
        .comment
        .handle(comment::Input {
            post_id: path.into_inner(),
            user,
            text,
        })
        .await?;

    Ok(HttpResponse::Created().json(post))
}
