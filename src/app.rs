use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{get_handler, health_handler, put_handler, root_handler};
use crate::routes;
use crate::state::AppState;

/// Assemble the service router.
///
/// Unknown paths fall through to axum's 404; other verbs on known paths get 405.
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route(routes::ROOT, get(root_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::DATA, get(get_handler).put(put_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{body_text, memory_app, send};
    use crate::config::DEFAULT_LOG_FILTER;
    use axum::http::StatusCode;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    /// Collects formatted log output in memory
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_requests_logged_under_default_filter() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(DEFAULT_LOG_FILTER))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = memory_app();
        let response = send(&app, "GET", "/data?id=traced", "").await;
        assert_eq!(response.status(), StatusCode::OK);

        let output = logs.contents();
        assert!(
            output.contains("finished processing request"),
            "expected a per-request line, got: {}",
            output
        );
        assert!(output.contains("/data?id=traced"));
    }

    #[tokio::test]
    async fn test_unknown_route_not_found() {
        let app = memory_app();

        let response = send(&app, "GET", "/nope", "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let app = memory_app();

        let response = send(&app, "POST", "/data", "hello").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = send(&app, "DELETE", "/data", "").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        // Nothing was written by the rejected requests
        let response = send(&app, "GET", "/data", "").await;
        assert_eq!(body_text(response).await, "none");
    }

    #[tokio::test]
    async fn test_openapi_json_served() {
        let app = memory_app();

        let response = send(&app, "GET", "/api-docs/openapi.json", "").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("kv-sync API"));
    }

    #[tokio::test]
    async fn test_default_key_read_matches_explicit() {
        let app = memory_app();

        send(&app, "PUT", "/data", "shared").await;

        let implicit = body_text(send(&app, "GET", "/data", "").await).await;
        let explicit = body_text(send(&app, "GET", "/data?id=default", "").await).await;
        assert_eq!(implicit, "shared");
        assert_eq!(implicit, explicit);
    }
}
