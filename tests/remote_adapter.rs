use actix_web::{web, App, HttpServer};
use tamil_sangam::adapters::{PostSource, RemotePostSource};
use tamil_sangam::controllers::configure;
use tamil_sangam::entities::{Category, NewPost, User};
use tamil_sangam::seed::STORE;

fn reader() -> User {
    User {
        id: 1,
        name: "வாசகர்".to_string(),
        avatar_url: None,
    }
}

#[actix_web::test]
async fn remote_source_round_trips_through_the_api() {
    let data = web::Data::new(tamil_sangam::in_memory());

    let server = HttpServer::new(move || App::new().app_data(data.clone()).configure(configure))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let source = RemotePostSource::new(format!("http://{}/api", addr));

    let posts = source.list_posts().await;
    assert_eq!(posts.len(), STORE.posts.len());

    let created = source
        .create_post(NewPost {
            title: "தொலைவுக் கவிதை".to_string(),
            content: "வலையின் வழியே வந்த வரிகள்".to_string(),
            category: Category::Kavithai,
            author: reader(),
        })
        .await
        .unwrap();
    assert_eq!(created.likes, 0);
    assert_eq!(source.list_posts().await[0].id, created.id);

    assert!(source.like_post(created.id).await);
    assert!(!source.like_post(-1).await);
    assert!(source.unlike_post(created.id).await);
    assert!(source.unlike_post(created.id).await);
    assert_eq!(source.list_posts().await[0].likes, 0);

    let rejected = source
        .create_post(NewPost {
            title: String::new(),
            content: "வரிகள்".to_string(),
            category: Category::Kavithai,
            author: reader(),
        })
        .await;
    assert!(rejected.is_none());

    handle.stop(true).await;
}

#[tokio::test]
async fn unreachable_backend_degrades_quietly() {
    // nothing listens on the discard port
    let source = RemotePostSource::new("http://127.0.0.1:9/api");

    assert!(source.list_posts().await.is_empty());
    assert!(!source.like_post(1001).await);
    assert!(source
        .create_post(NewPost {
            title: "t".to_string(),
            content: "c".to_string(),
            category: Category::Kathai,
            author: reader(),
        })
        .await
        .is_none());
}
