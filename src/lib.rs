// Library root for the demo web application

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod views;

// Re-export commonly used types
pub use error::AppError;
pub use models::ViewResponse;
pub use views::ViewEngine;
