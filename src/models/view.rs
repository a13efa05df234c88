use serde::Serialize;
use std::collections::HashMap;

/// View response produced by a page handler: the name of the template to
/// render plus the string attributes handed to the template engine.
///
/// Constructed fresh per request and consumed by the view engine once
/// rendered; it holds no shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewResponse {
    pub template: String,
    pub attributes: HashMap<String, String>,
}

impl ViewResponse {
    /// Create a response for the given template with no attributes
    pub fn new(template: impl Into<String>) -> Self {
        ViewResponse {
            template: template.into(),
            attributes: HashMap::new(),
        }
    }

    /// Add a single attribute, builder-style
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
