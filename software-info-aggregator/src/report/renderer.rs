//! Report template renderer.

use handlebars::{no_escape, Handlebars};
use serde_json::json;

use super::ReportError;

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (the output is markdown, and the table cells embed
///   raw link syntax)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Renderer for the README report template.
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    /// Creates a new report renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the report template.
    ///
    /// The template sees two bindings: `software_info_summary_table` (the
    /// markdown-formatted table) and `last_updated` (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_report(
        &self,
        template: &str,
        table_markdown: &str,
        last_updated: &str,
    ) -> Result<String, ReportError> {
        let data = json!({
            "software_info_summary_table": table_markdown,
            "last_updated": last_updated,
        });

        Ok(self.handlebars.render_template(template, &data)?)
    }
}
