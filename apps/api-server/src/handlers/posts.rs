//! Post handlers.
//!
//! Every mutating handler checks that the post exists first, so an update can
//! never create a post and a delete of an unknown id is a 404.

use actix_web::{HttpResponse, web};

use feedline_core::domain::Post;
use feedline_core::ports::BaseRepository;
use feedline_shared::PostRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Post with id {} not found", id))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = Post::new(req.author, req.post_content, req.image_url);
    let saved = state.posts.save(post).await?;
    tracing::info!(post_id = ?saved.id, "Post created");

    Ok(HttpResponse::Ok().json(saved))
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/posts/{id}
///
/// Replaces `author`, `postContent` and `imageUrl`; omitted fields become null.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    post.replace_content(req.author, req.post_content, req.image_url);
    let updated = state.posts.save(post).await?;
    tracing::info!(post_id = id, "Post updated");

    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if !state.posts.exists_by_id(id).await? {
        return Err(post_not_found(id));
    }

    state.posts.delete_by_id(id).await?;
    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{StatusCode, header::ContentType};
    use actix_web::{App, test, web};
    use feedline_core::domain::Post;
    use feedline_infra::InMemoryPostRepository;
    use serde_json::{Value, json};

    use crate::config::DEFAULT_MAX_BODY_BYTES;
    use crate::handlers::configure_routes;
    use crate::middleware::cors;
    use crate::state::AppState;

    macro_rules! test_app {
        () => {
            test_app!(DEFAULT_MAX_BODY_BYTES)
        };
        ($limit:expr) => {
            test::init_service(
                App::new()
                    .wrap(cors::permissive())
                    .app_data(web::Data::new(AppState::with_repository(Arc::new(
                        InMemoryPostRepository::new(),
                    ))))
                    .configure(configure_routes($limit)),
            )
            .await
        };
    }

    macro_rules! submit_post {
        ($app:expr, $body:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api/posts")
                .set_json($body)
                .to_request();
            let post: Post = test::call_and_read_body_json(&$app, req).await;
            post
        }};
    }

    macro_rules! list_ids {
        ($app:expr) => {{
            let req = test::TestRequest::get().uri("/api/posts").to_request();
            let posts: Vec<Post> = test::call_and_read_body_json(&$app, req).await;
            posts.into_iter().filter_map(|p| p.id).collect::<Vec<i64>>()
        }};
    }

    #[actix_web::test]
    async fn test_post_lifecycle() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"author": "alice", "postContent": "hi"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let created: Post = test::read_body_json(resp).await;
        assert_eq!(created.id, Some(1));
        assert!(created.created_date.is_some());
        assert_eq!(created.created_date, created.modified_date);

        let req = test::TestRequest::get().uri("/api/posts/1").to_request();
        let fetched: Post = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.author.as_deref(), Some("alice"));
        assert_eq!(fetched.post_content.as_deref(), Some("hi"));

        let req = test::TestRequest::put()
            .uri("/api/posts/1")
            .set_json(json!({"author": "alice", "postContent": "hi there", "imageUrl": null}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Post = test::read_body_json(resp).await;
        assert_eq!(updated.post_content.as_deref(), Some("hi there"));
        assert_eq!(updated.created_date, created.created_date);
        assert!(updated.modified_date >= created.modified_date);

        let req = test::TestRequest::delete().uri("/api/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(resp).await.is_empty());

        let req = test::TestRequest::get().uri("/api/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_empty() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_list_tracks_live_posts() {
        let app = test_app!();

        for content in ["one", "two", "three"] {
            submit_post!(app, json!({"author": "alice", "postContent": content}));
        }
        let req = test::TestRequest::delete().uri("/api/posts/2").to_request();
        test::call_service(&app, req).await;
        let req = test::TestRequest::put()
            .uri("/api/posts/3")
            .set_json(json!({"postContent": "edited"}))
            .to_request();
        test::call_service(&app, req).await;

        assert_eq!(list_ids!(app), vec![1, 3]);
    }

    #[actix_web::test]
    async fn test_unknown_id_is_not_found_everywhere() {
        let app = test_app!();
        submit_post!(app, json!({"author": "alice"}));

        let requests = [
            test::TestRequest::get().uri("/api/posts/99").to_request(),
            test::TestRequest::put()
                .uri("/api/posts/99")
                .set_json(json!({"author": "mallory"}))
                .to_request(),
            test::TestRequest::delete().uri("/api/posts/99").to_request(),
        ];
        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            assert!(test::read_body(resp).await.is_empty());
        }

        assert_eq!(list_ids!(app), vec![1]);
    }

    #[actix_web::test]
    async fn test_update_is_full_replace_and_repeatable() {
        let app = test_app!();
        let created = submit_post!(
            app,
            json!({"author": "alice", "postContent": "hi", "imageUrl": "http://img/1.png"})
        );

        let payload = json!({"id": 77, "postContent": "only content", "createdDate": "2000-01-01T00:00:00"});
        let mut previous = created.clone();
        for _ in 0..2 {
            let req = test::TestRequest::put()
                .uri("/api/posts/1")
                .set_json(&payload)
                .to_request();
            let updated: Post = test::call_and_read_body_json(&app, req).await;

            assert_eq!(updated.id, Some(1));
            assert_eq!(updated.author, None);
            assert_eq!(updated.post_content.as_deref(), Some("only content"));
            assert_eq!(updated.image_url, None);
            assert_eq!(updated.created_date, created.created_date);
            assert!(updated.modified_date >= previous.modified_date);
            previous = updated;
        }
    }

    #[actix_web::test]
    async fn test_create_ignores_client_managed_fields() {
        let app = test_app!();

        let created = submit_post!(
            app,
            json!({"id": 50, "author": "bob", "createdDate": "2000-01-01T00:00:00"})
        );

        assert_eq!(created.id, Some(1));
        assert_eq!(created.author.as_deref(), Some("bob"));
        assert_eq!(created.post_content, None);
        assert_ne!(
            created.created_date.map(|d| d.to_string()),
            Some("2000-01-01 00:00:00".to_string())
        );
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(ContentType::json())
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"author": 12}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        assert!(list_ids!(app).is_empty());
    }

    #[actix_web::test]
    async fn test_long_content_is_accepted() {
        let app = test_app!();
        let content = "x".repeat(3 * 1024 * 1024);

        let created = submit_post!(app, json!({"author": "alice", "postContent": content}));

        assert_eq!(created.post_content.map(|c| c.len()), Some(3 * 1024 * 1024));
    }

    #[actix_web::test]
    async fn test_oversized_body_is_payload_too_large() {
        let app = test_app!(64);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"author": "alice", "postContent": "x".repeat(128)}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 413);
        assert_eq!(body["title"], "Payload Too Large");

        assert!(list_ids!(app).is_empty());
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_bad_request() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/api/posts/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_cors_allows_any_origin() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/api/posts")
            .insert_header(("Origin", "http://somewhere.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.headers()
                .contains_key("access-control-allow-origin")
        );
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
    }
}
