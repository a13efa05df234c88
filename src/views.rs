use crate::error::{AppError, AppResult};
use crate::models::view::ViewResponse;
use tera::{Context, Tera};
use tracing::info;

/// Template engine wrapper that resolves view names to tera templates.
/// Loaded once at startup and shared read-only across request handlers,
/// so concurrent rendering needs no locking.
#[derive(Clone)]
pub struct ViewEngine {
    tera: Tera,
}

impl ViewEngine {
    /// Load and parse every template matching the given glob.
    ///
    /// # Arguments
    /// * `templates_glob` - Glob pattern for template files, e.g. `templates/**/*.html`
    pub fn new(templates_glob: &str) -> AppResult<Self> {
        info!("Loading templates matching: {}", templates_glob);

        let tera = Tera::new(templates_glob)?;

        info!(
            "Registered {} templates",
            tera.get_template_names().count()
        );
        Ok(ViewEngine { tera })
    }

    /// Verify that every required view is registered.
    ///
    /// A glob that matches no files still produces an empty engine, so the
    /// startup sequence calls this to fail fast on a missing template.
    pub fn verify_required(&self, views: &[&str]) -> AppResult<()> {
        for view in views {
            let template = Self::template_file(view);
            if !self.tera.get_template_names().any(|name| name == template) {
                return Err(AppError::missing_template(template));
            }
        }

        Ok(())
    }

    /// Render a view response into an HTML string
    pub fn render(&self, view: &ViewResponse) -> AppResult<String> {
        let context = Context::from_serialize(&view.attributes)?;
        let html = self.tera.render(&Self::template_file(&view.template), &context)?;

        Ok(html)
    }

    /// Map a bare view name to its template file name ("index" -> "index.html")
    fn template_file(view: &str) -> String {
        format!("{}.html", view)
    }
}
