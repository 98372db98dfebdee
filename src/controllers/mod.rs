use alloc::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use crate::usecases::post::{comment, get, gets, like, submit, unlike};

pub mod catalog;
pub mod error;
pub mod posts;

use error::ApiError;

pub struct PostController {
    pub gets: Arc<dyn gets::Usecase + Sync + Send>,
    pub get: Arc<dyn get::Usecase + Sync + Send>,
    pub submit: Arc<dyn submit::Usecase + Sync + Send>,
    pub like: Arc<dyn like::Usecase + Sync + Send>,
    pub unlike: Arc<dyn unlike::Usecase + Sync + Send>,
    pub comment: Arc<dyn comment::Usecase + Sync + Send>,
}

/// Mounts the REST surface under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json = web::JsonConfig::default().error_handler(|e, _| ApiError::BadRequest(e.to_string()).into());

    cfg.app_data(json).service(
        web::scope("/api")
            .route("/health", web::get().to(catalog::health))
            .route("/posts", web::get().to(posts::list))
            .route("/posts", web::post().to(posts::create))
            .route("/posts/category/{category}", web::get().to(posts::by_category))
            .route("/posts/author/{id}", web::get().to(posts::by_author))
            .route("/posts/{id}", web::get().to(posts::get))
            .route("/posts/{id}/like", web::post().to(posts::like))
            .route("/posts/{id}/unlike", web::post().to(posts::unlike))
            .route("/posts/{id}/comments", web::post().to(posts::comment))
            .route("/classics", web::get().to(catalog::classics))
            .route("/classics/{id}", web::get().to(catalog::classic))
            .route("/competitions", web::get().to(catalog::competitions)),
    );
}

pub async fn serve(controller: PostController, addr: (String, u16)) -> ::std::io::Result<()> {
    let data = web::Data::new(controller);

    tracing::info!(host = %addr.0, port = addr.1, "listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .configure(configure)
    })
    .bind(addr)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    use super::*;
    use crate::entities::{Competition, Post};
    use crate::seed::{authors, STORE};

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(crate::constructors::in_memory()))
                    .configure(configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn lists_posts_newest_first() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(posts.len(), STORE.posts.len());
        assert!(posts.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[actix_web::test]
    async fn category_route_matches_exactly_and_tolerates_unknown() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/api/posts/category/%E0%AE%95%E0%AE%B5%E0%AE%BF%E0%AE%A4%E0%AF%88")
            .to_request();
        let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
        assert!(!posts.is_empty());
        assert!(posts.iter().all(|p| p.category.label() == "கவிதை"));

        let req = test::TestRequest::get()
            .uri("/api/posts/category/unknown")
            .to_request();
        let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn create_returns_201_with_server_fields() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "title": "புது",
                "content": "வரி",
                "category": "கதை",
                "author": { "id": 1, "name": "வாசகர்" },
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let post: Post = test::read_body_json(resp).await;
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(posts[0].id, post.id);
    }

    #[actix_web::test]
    async fn create_rejects_empty_fields_with_json_message() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "title": "",
                "content": "வரி",
                "category": "கதை",
                "author": { "id": 1, "name": "வாசகர்" },
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].is_string());
    }

    #[actix_web::test]
    async fn like_and_unlike() {
        let app = app!();
        let target = &STORE.posts[0];

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{}/like", target.id))
            .to_request();
        let post: Post = test::call_and_read_body_json(&app, req).await;
        assert_eq!(post.likes, target.likes + 1);

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{}/unlike", target.id))
            .to_request();
        let post: Post = test::call_and_read_body_json(&app, req).await;
        assert_eq!(post.likes, target.likes);

        let req = test::TestRequest::post().uri("/api/posts/1/like").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn catalogue_routes() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/classics").to_request();
        let works: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(works.as_array().unwrap().len(), STORE.classics.len());

        let req = test::TestRequest::get().uri("/api/classics/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn get_one_or_404() {
        let app = app!();
        let target = &STORE.posts[0];

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", target.id))
            .to_request();
        let post: Post = test::call_and_read_body_json(&app, req).await;
        assert_eq!(&post, target);

        let req = test::TestRequest::get().uri("/api/posts/123").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].is_string());
    }

    #[actix_web::test]
    async fn author_route_and_query_agree() {
        let app = app!();
        let kalam = authors::kalam();
        let expected = STORE.posts.iter().filter(|p| p.author.id == kalam.id).count();

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/author/{}", kalam.id))
            .to_request();
        let by_route: Vec<Post> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(by_route.len(), expected);
        assert!(by_route.iter().all(|p| p.author.id == kalam.id));

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts?author={}", kalam.id))
            .to_request();
        let by_query: Vec<Post> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(by_query, by_route);
    }

    #[actix_web::test]
    async fn text_query_is_case_insensitive() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "title": "Monsoon Lines",
                "content": "மழை",
                "category": "கவிதை",
                "author": { "id": 1, "name": "வாசகர்" },
            }))
            .to_request();
        let created: Post = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get().uri("/api/posts?q=MONSOON").to_request();
        let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, created.id);

        let req = test::TestRequest::get().uri("/api/posts?q=zzzz").to_request();
        let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn comment_answers_201_and_appends() {
        let app = app!();
        let target = &STORE.posts[0];

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{}/comments", target.id))
            .set_json(json!({
                "user": { "id": 1, "name": "வாசகர்" },
                "text": "அருமை",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let post: Post = test::read_body_json(resp).await;
        assert_eq!(post.comments.len(), target.comments.len() + 1);
        assert_eq!(post.comments.last().unwrap().text, "அருமை");

        let req = test::TestRequest::post()
            .uri("/api/posts/123/comments")
            .set_json(json!({
                "user": { "id": 1, "name": "வாசகர்" },
                "text": "அருமை",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn competitions_route() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/competitions").to_request();
        let list: Vec<Competition> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list, STORE.competitions);
        assert_eq!(list.iter().filter(|c| c.accepts_entries()).count(), 2);
    }
}
