// Models module

pub mod view;

// Re-export commonly used types
pub use view::ViewResponse;
