//! Post handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use masterblog_core::domain::Post;
use masterblog_core::{Outcome, SortOrder};
use masterblog_shared::ApiResponse;
use masterblog_shared::dto::{PostRequest, PostResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub sort: SortOrder,
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        author: post.author,
        title: post.title,
        content: post.content,
        likes: post.likes,
    }
}

/// Wrap a store outcome, turning storage warnings into the response message.
fn envelope<T>(outcome: Outcome<T>) -> ApiResponse<T> {
    if outcome.is_clean() {
        return ApiResponse::ok(outcome.value);
    }

    let message = outcome
        .warnings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    ApiResponse::ok_with_message(outcome.value, message)
}

/// GET /api/posts?sort=newest
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let outcome = state
        .posts
        .list(query.sort)
        .await?
        .map(|posts| posts.into_iter().map(to_response).collect::<Vec<_>>());

    Ok(HttpResponse::Ok().json(envelope(outcome)))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, id: web::Path<u64>) -> AppResult<HttpResponse> {
    let outcome = state.posts.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(envelope(outcome.map(to_response))))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let outcome = state
        .posts
        .create(&req.title, &req.content, req.author.as_deref())
        .await?;

    Ok(HttpResponse::Created().json(envelope(outcome.map(to_response))))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    id: web::Path<u64>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let outcome = state
        .posts
        .update(
            id.into_inner(),
            &req.title,
            &req.content,
            req.author.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(envelope(outcome.map(to_response))))
}

/// DELETE /api/posts/{id} - responds with the removed post.
pub async fn delete_post(
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let outcome = state.posts.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(envelope(outcome.map(to_response))))
}

/// POST /api/posts/{id}/like
pub async fn like_post(state: web::Data<AppState>, id: web::Path<u64>) -> AppResult<HttpResponse> {
    let outcome = state.posts.like(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(envelope(outcome.map(to_response))))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, middleware::from_fn, test};
    use masterblog_infra::storage::{InMemoryPostStorage, JsonFilePostStorage};
    use serde_json::{Value, json};

    use crate::handlers::configure_routes;
    use crate::observability::{REQUEST_ID_HEADER, request_id};
    use crate::state::AppState;

    fn memory_state() -> AppState {
        AppState::with_storage(Arc::new(InMemoryPostStorage::new()))
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .wrap(from_fn(request_id))
                    .app_data(actix_web::web::Data::new($state))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_and_list() {
        let app = app!(memory_state());

        for title in ["First", "Second"] {
            let req = test::TestRequest::post()
                .uri("/api/posts")
                .set_json(json!({ "title": title, "content": "body", "author": "Ada" }))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get()
            .uri("/api/posts?sort=newest")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["id"], 2);
        assert_eq!(body["data"][1]["title"], "First");
        assert_eq!(body["data"][1]["likes"], 0);
        assert!(body.get("message").is_none());
    }

    #[actix_web::test]
    async fn test_create_with_missing_fields() {
        let app = app!(memory_state());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "   " }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(res.headers().contains_key(REQUEST_ID_HEADER));
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["errors"][0]["field"], "title");
        assert_eq!(body["errors"][1]["field"], "content");
    }

    #[actix_web::test]
    async fn test_duplicate_title_conflict() {
        let app = app!(memory_state());

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/api/posts")
                .set_json(json!({ "title": "Same", "content": "body" }))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), expected);
        }
    }

    #[actix_web::test]
    async fn test_like_update_delete() {
        let app = app!(memory_state());
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "A", "content": "x" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post().uri("/api/posts/1/like").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["likes"], 1);

        let req = test::TestRequest::put()
            .uri("/api/posts/1")
            .set_json(json!({ "title": "a", "content": "edited" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["content"], "edited");
        assert_eq!(body["data"]["likes"], 1);

        let req = test::TestRequest::delete().uri("/api/posts/1").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/posts/1").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_unknown_id_is_not_found() {
        let app = app!(memory_state());

        let req = test::TestRequest::post()
            .uri("/api/posts/42/like")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], 404);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app!(memory_state());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();

        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[actix_web::test]
    async fn test_request_id_is_echoed() {
        let app = app!(memory_state());

        let req = test::TestRequest::get()
            .uri("/api/health")
            .insert_header((REQUEST_ID_HEADER, "abc-123"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.headers().get(REQUEST_ID_HEADER).unwrap(), "abc-123");
    }

    #[actix_web::test]
    async fn test_unreadable_file_is_reported_in_message() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, "definitely not json").unwrap();
        let app = app!(AppState::with_storage(Arc::new(JsonFilePostStorage::new(
            path
        ))));

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"], json!([]));
        assert!(body["message"].as_str().unwrap().contains("could not be read"));
    }
}
