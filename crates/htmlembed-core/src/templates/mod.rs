//! Template system for the generated artifact's boilerplate.
//!
//! The header comment and the accessor routines are embedded into the binary at
//! compile-time via [`include_str!`] in the [`embedded`] module, then rendered with
//! [Handlebars](https://handlebarsjs.com/) via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! - `{{file_name}}` — artifact file name (e.g., `HtmlTemplates.gs`), header only
//! - `{{mapping}}` — global mapping variable (e.g., `HTML_TEMPLATES`)
//! - `{{get_fn}}` / `{{create_fn}}` — accessor function names
//! - `{{html_constructor}}` — HtmlOutput constructor (e.g., `HtmlService.createHtmlOutput`)
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;
