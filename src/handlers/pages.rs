// Page handlers
// HTTP handlers for the server-rendered pages

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use std::sync::Arc;
use tracing::info;

use crate::{error::AppError, models::view::ViewResponse, views::ViewEngine};

/// Welcome message shown on the home page
pub const WELCOME_MESSAGE: &str = "Welcome to your simple Maven‑Java app!";

/// Views the page handlers render; verified present at startup
pub const REQUIRED_VIEWS: &[&str] = &["index", "error"];

/// Build the view response for the home page.
///
/// Pure and stateless: every call yields the same response, so concurrent
/// invocation is safe without locking.
pub fn home_view() -> ViewResponse {
    ViewResponse::new("index").with_attribute("message", WELCOME_MESSAGE)
}

/// Build the view response for the error page, with no attributes
pub fn error_view() -> ViewResponse {
    ViewResponse::new("error")
}

/// Render the home page
/// GET /
pub async fn home(State(views): State<Arc<ViewEngine>>) -> Result<impl IntoResponse, AppError> {
    info!("Rendering home page");

    let html = views.render(&home_view())?;

    Ok(Html(html))
}

/// Render the error page
/// GET /error
pub async fn error_page(
    State(views): State<Arc<ViewEngine>>,
) -> Result<impl IntoResponse, AppError> {
    info!("Rendering error page");

    let html = views.render(&error_view())?;

    Ok(Html(html))
}

/// Render the error page for any unmatched path, with a 404 status
pub async fn not_found(
    State(views): State<Arc<ViewEngine>>,
) -> Result<impl IntoResponse, AppError> {
    info!("No route matched, rendering error page");

    let html = views.render(&error_view())?;

    Ok((StatusCode::NOT_FOUND, Html(html)))
}
