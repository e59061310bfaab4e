//! Handlebars-based template renderer for the generated artifact.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled, so a
//! `{{variable}}` missing from the data context is an error instead of an empty string.
//! HTML escaping is switched off: the output is JavaScript, and the only values
//! substituted are identifiers and file names already checked by the config.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{embedded, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "file_name": "HtmlTemplates.gs" });
//! let header = renderer.render(embedded::HEADER, &data)?;
//! ```

use handlebars::{no_escape, Handlebars};
use serde_json::Value;

use crate::error::{EmbedError, Result};

/// Template renderer using Handlebars for the artifact boilerplate.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode on and escaping off.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| EmbedError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
