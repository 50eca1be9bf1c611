use super::{plain_text, PlainText};
use crate::error::ApiError;
use crate::models::DataQuery;
use crate::routes;
use crate::state::AppState;
use crate::sync;
use axum::extract::{Query, State};

/// PUT /data handler - Replace a record with the request body
#[utoipa::path(
    put,
    path = routes::DATA,
    params(DataQuery),
    request_body(content = String, description = "New value, stored verbatim", content_type = "text/plain"),
    responses(
        (status = 200, description = "Record stored", body = String, content_type = "text/plain"),
        (status = 400, description = "Body is not valid UTF-8"),
        (status = 413, description = "Body exceeds the configured limit"),
        (status = 500, description = "Storage error", body = String, content_type = "text/plain")
    ),
    tag = "data"
)]
pub async fn put_handler(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
    body: String,
) -> Result<PlainText, ApiError> {
    let key = sync::resolve_key(query.id, &state.config.default_key);

    let reply = sync::write(state.store.as_ref(), &key, &body).await?;

    tracing::info!("Stored record {:?} ({} bytes)", key, body.len());
    Ok(plain_text(reply))
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::handlers::test_support::{app_with, body_text, memory_app, send, FailingStore};
    use crate::state::AppState;
    use crate::store::MemoryStore;
    use axum::{body::Body, http::{header, Request, StatusCode}};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_put_then_get_default_key() {
        let app = memory_app();

        let response = send(&app, "PUT", "/data", "hello").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
        assert_eq!(body_text(response).await, "Done");

        let response = send(&app, "GET", "/data", "").await;
        assert_eq!(body_text(response).await, "hello");
    }

    #[tokio::test]
    async fn test_put_overwrites_keyed_record() {
        let app = memory_app();

        send(&app, "PUT", "/data?id=bob", "x").await;
        send(&app, "PUT", "/data?id=bob", "y").await;

        let response = send(&app, "GET", "/data?id=bob", "").await;
        assert_eq!(body_text(response).await, "y");

        let response = send(&app, "GET", "/data", "").await;
        assert_eq!(body_text(response).await, "none");
    }

    #[tokio::test]
    async fn test_put_same_value_twice() {
        let app = memory_app();

        send(&app, "PUT", "/data?id=bob", "same").await;
        send(&app, "PUT", "/data?id=bob", "same").await;

        let response = send(&app, "GET", "/data?id=bob", "").await;
        assert_eq!(body_text(response).await, "same");
    }

    #[tokio::test]
    async fn test_put_body_stored_verbatim() {
        let app = memory_app();
        let body = "{\"slides\": [1, 2, 3]}\n  trailing whitespace  ";

        send(&app, "PUT", "/data?id=deck", body).await;

        let response = send(&app, "GET", "/data?id=deck", "").await;
        assert_eq!(body_text(response).await, body);
    }

    #[tokio::test]
    async fn test_put_empty_body() {
        let app = memory_app();

        send(&app, "PUT", "/data", "something").await;
        let response = send(&app, "PUT", "/data", "").await;
        assert_eq!(body_text(response).await, "Done");

        let response = send(&app, "GET", "/data", "").await;
        assert_eq!(body_text(response).await, "");
    }

    #[tokio::test]
    async fn test_put_ignores_set_param() {
        let app = memory_app();

        let response = send(&app, "PUT", "/data?set=ignored", "from body").await;
        assert_eq!(body_text(response).await, "Done");

        let response = send(&app, "GET", "/data", "").await;
        assert_eq!(body_text(response).await, "from body");
    }

    #[tokio::test]
    async fn test_put_uses_configured_default_key() {
        let mut config = Config::for_memory();
        config.default_key = "slides".to_string();
        let app = crate::app::router(AppState::new(Arc::new(MemoryStore::new()), config));

        send(&app, "PUT", "/data", "deck").await;

        let response = send(&app, "GET", "/data?id=slides", "").await;
        assert_eq!(body_text(response).await, "deck");
    }

    #[tokio::test]
    async fn test_put_body_too_large() {
        let mut config = Config::for_memory();
        config.max_body_bytes = 4;
        let app = crate::app::router(AppState::new(Arc::new(MemoryStore::new()), config));

        let response = send(&app, "PUT", "/data", "too long").await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let response = send(&app, "GET", "/data", "").await;
        assert_eq!(body_text(response).await, "none");
    }

    #[tokio::test]
    async fn test_put_rejects_invalid_utf8_body() {
        let app = memory_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/data")
                    .body(Body::from(vec![0x68, 0xFF, 0x69]))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, "GET", "/data", "").await;
        assert_eq!(body_text(response).await, "none");
    }

    #[tokio::test]
    async fn test_put_storage_failure() {
        let app = app_with(Arc::new(FailingStore));

        let response = send(&app, "PUT", "/data", "hello").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Storage error: store offline");
    }
}
