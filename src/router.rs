// Router module
// Explicit route table mapping each (method, path) pair to its handler

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::{
    config::Config,
    handlers::{health_check, pages},
    middleware::create_middleware_stack,
    views::ViewEngine,
};

/// Create the axum router with all routes and middleware
pub fn create_router(views: Arc<ViewEngine>, config: &Config) -> Router {
    Router::new()
        // Page routes
        .route("/", get(pages::home))
        .route("/error", get(pages::error_page))
        // Health check endpoint
        .route("/health", get(health_check))
        // Static assets
        .nest_service("/static", ServeDir::new(&config.static_dir))
        // Unmatched paths render the error page
        .fallback(pages::not_found)
        // Add shared state (view engine)
        .with_state(views)
        // Apply middleware stack
        .layer(create_middleware_stack())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::handlers::pages::{REQUIRED_VIEWS, WELCOME_MESSAGE};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            port: 8080,
            templates_dir: "templates".to_string(),
            static_dir: "static".to_string(),
            environment: Environment::Local,
        }
    }

    /// Compose the application the way main does: config, view engine,
    /// template verification, route table.
    fn test_app() -> Router {
        let config = test_config();

        let views = Arc::new(
            ViewEngine::new(&config.templates_glob()).expect("Failed to load templates"),
        );
        views
            .verify_required(REQUIRED_VIEWS)
            .expect("Required templates are missing");

        create_router(views, &config)
    }

    fn get_request(path: &str) -> Request<Body> {
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request")
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
    }

    #[tokio::test]
    async fn test_application_starts_without_error() {
        // Composing config, view engine and router must succeed and serve
        let app = test_app();

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_home_renders_welcome_message() {
        let response = test_app().oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains(WELCOME_MESSAGE));
    }

    #[tokio::test]
    async fn test_get_error_renders_error_page() {
        let response = test_app().oneshot(get_request("/error")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Something went wrong"));
    }

    #[tokio::test]
    async fn test_repeated_requests_yield_identical_bodies() {
        let app = test_app();

        let first = app.clone().oneshot(get_request("/")).await.unwrap();
        let second = app.oneshot(get_request("/")).await.unwrap();

        assert_eq!(body_string(first).await, body_string(second).await);
    }

    #[tokio::test]
    async fn test_unmatched_path_renders_error_page_with_404() {
        let response = test_app()
            .oneshot(get_request("/does-not-exist"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_string(response).await;
        assert!(body.contains("Something went wrong"));
    }

    #[tokio::test]
    async fn test_health_reports_ok_status() {
        let response = test_app().oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains(r#""status":"ok""#));
    }

    #[tokio::test]
    async fn test_static_assets_are_served() {
        let response = test_app()
            .oneshot(get_request("/static/style.css"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_concurrent_requests_are_not_cross_contaminated() {
        let app = test_app();

        let mut tasks = Vec::new();
        for request_number in 0..16 {
            let app = app.clone();
            tasks.push(tokio::spawn(async move {
                let path = if request_number % 2 == 0 { "/" } else { "/error" };
                let response = app.oneshot(get_request(path)).await.unwrap();
                (path, body_string(response).await)
            }));
        }

        for task in tasks {
            let (path, body) = task.await.expect("request task panicked");
            if path == "/" {
                assert!(body.contains(WELCOME_MESSAGE));
                assert!(!body.contains("Something went wrong"));
            } else {
                assert!(body.contains("Something went wrong"));
                assert!(!body.contains(WELCOME_MESSAGE));
            }
        }
    }
}
