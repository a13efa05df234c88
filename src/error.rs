use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Template not registered: {0}")]
    MissingTemplate(String),
}

impl AppError {
    pub fn missing_template(name: impl Into<String>) -> Self {
        Self::MissingTemplate(name.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Template(ref err) => {
                tracing::error!("Template rendering failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
            AppError::MissingTemplate(ref name) => {
                tracing::error!("Required template is not registered: {}", name);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        // Built-in body, used when the error view itself cannot be rendered
        let body = Html(format!(
            "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body><h1>{}</h1></body>\n</html>",
            status, message
        ));

        (status, body).into_response()
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
