//! Artifact assembly.
//!
//! Turns the ordered source entries into the text of the generated `.gs` file. The
//! output is a pure function of the entries and the options: same input, same bytes.
//!
//! ## Layout
//!
//! ```text
//! /****** header comment ******/
//!
//! var HTML_TEMPLATES = {};
//!
//!
//! HTML_TEMPLATES['SimpleSetup'] = '<div>...</div>\n';
//!
//! HTML_TEMPLATES['PromptEditor'] = '...';
//!
//!
//! function getHtmlTemplate(name) { ... }
//!
//! function createHtmlFromTemplate(name) { ... }
//! ```
//!
//! Lines are joined with `\n` and the file ends with a single newline. Escaped bodies
//! never contain a raw line break, so each assignment is exactly one line.

use serde_json::json;

use crate::config::{AccessorNames, EmbedConfig, MissPolicy};
use crate::error::Result;
use crate::escape::escape;
use crate::source::SourceEntry;
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// Everything the assembler needs besides the entries.
#[derive(Debug, Clone)]
pub struct ArtifactOptions {
    /// File name shown in the header comment.
    pub file_name: String,
    pub names: AccessorNames,
    pub miss_policy: MissPolicy,
}

impl ArtifactOptions {
    /// Options for a config; the header names the config's output file.
    pub fn from_config(config: &EmbedConfig) -> Self {
        let file_name = config
            .output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| config.output.display().to_string());
        Self {
            file_name,
            names: config.names.clone(),
            miss_policy: config.miss_policy,
        }
    }
}

impl Default for ArtifactOptions {
    fn default() -> Self {
        Self::from_config(&EmbedConfig::default())
    }
}

/// The assignment statement for one entry.
pub fn assignment(mapping: &str, key: &str, content: &str) -> String {
    format!("{mapping}['{}'] = '{}';", escape(key), escape(content))
}

/// Assemble the artifact text.
pub fn assemble(entries: &[SourceEntry], options: &ArtifactOptions) -> Result<String> {
    let renderer = TemplateRenderer::new();
    let names = &options.names;

    let header = renderer.render(
        embedded::HEADER,
        &json!({ "file_name": options.file_name }),
    )?;
    let accessors = renderer.render(
        embedded::accessors_for(options.miss_policy),
        &json!({
            "mapping": names.mapping,
            "get_fn": names.get,
            "create_fn": names.create,
            "html_constructor": names.html_constructor,
        }),
    )?;

    let mut lines: Vec<String> = header.lines().map(str::to_owned).collect();
    lines.push(String::new());
    lines.push(format!("var {} = {{}};", names.mapping));
    lines.push(String::new());

    for entry in entries {
        lines.push(String::new());
        lines.push(assignment(&names.mapping, &entry.key, &entry.content));
    }

    lines.push(String::new());
    lines.push(String::new());
    lines.extend(accessors.lines().map(str::to_owned));
    lines.push(String::new());

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER_BLOCK: &str = "\
/******************************************************
 * HtmlTemplates.gs - HTML template strings
 *
 * Generated by htmlembed. Do not edit by hand.
 * Library code cannot load HTML files, so the markup is embedded as strings.
 ******************************************************/
";

    fn entries() -> Vec<SourceEntry> {
        vec![
            SourceEntry::new("SimpleSetup.txt", "SimpleSetup", "<p>it's</p>\r\n"),
            SourceEntry::new("A.B.txt", "A_B", "a\\b"),
        ]
    }

    #[test]
    fn test_assignment_line() {
        assert_eq!(
            assignment("HTML_TEMPLATES", "SimpleSetup", "<b>'x'</b>\n"),
            "HTML_TEMPLATES['SimpleSetup'] = '<b>\\'x\\'</b>\\n';"
        );
    }

    #[test]
    fn test_layout_exact() {
        let out = assemble(&entries(), &ArtifactOptions::default()).unwrap();
        let expected_prefix = format!(
            "{HEADER_BLOCK}\nvar HTML_TEMPLATES = {{}};\n\n\n\
             HTML_TEMPLATES['SimpleSetup'] = '<p>it\\'s</p>\\n';\n\n\
             HTML_TEMPLATES['A_B'] = 'a\\\\b';\n\n\n/**\n"
        );
        assert!(
            out.starts_with(&expected_prefix),
            "unexpected layout:\n{out}"
        );
        assert!(out.ends_with("}\n"));
        assert!(!out.ends_with("}\n\n"));
    }

    #[test]
    fn test_one_statement_per_entry_in_order() {
        let out = assemble(&entries(), &ArtifactOptions::default()).unwrap();
        let statements: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with("HTML_TEMPLATES['"))
            .collect();
        assert_eq!(statements.len(), 2);
        assert!(statements[0].starts_with("HTML_TEMPLATES['SimpleSetup']"));
        assert!(statements[1].starts_with("HTML_TEMPLATES['A_B']"));
    }

    #[test]
    fn test_no_entries_still_declares_mapping_and_accessors() {
        let out = assemble(&[], &ArtifactOptions::default()).unwrap();
        assert!(out.contains("\nvar HTML_TEMPLATES = {};\n\n\n\n/**\n"));
        assert!(out.contains("function getHtmlTemplate(name) {"));
        assert!(out.contains("function createHtmlFromTemplate(name) {"));
    }

    #[test]
    fn test_null_policy_accessors() {
        let out = assemble(&entries(), &ArtifactOptions::default()).unwrap();
        assert!(out.contains(
            "  return Object.prototype.hasOwnProperty.call(HTML_TEMPLATES, name) ? HTML_TEMPLATES[name] : null;"
        ));
        assert!(out.contains("    return HtmlService.createHtmlOutput(html);\n  }\n  return null;\n}"));
        assert!(!out.contains("throw"));
    }

    #[test]
    fn test_throw_policy_accessors() {
        let options = ArtifactOptions {
            miss_policy: MissPolicy::Throw,
            ..ArtifactOptions::default()
        };
        let out = assemble(&entries(), &options).unwrap();
        assert!(out.contains("? HTML_TEMPLATES[name] : '';"));
        assert!(out.contains("throw new Error('Template not found: ' + name);"));
        assert!(out.contains("  return HtmlService.createHtmlOutput(html);\n}"));
    }

    /// Text of one generated function, from its `function` line to the closing `}`.
    fn function_body<'a>(out: &'a str, name: &str) -> &'a str {
        let start = out
            .find(&format!("function {name}(name) {{"))
            .unwrap();
        let end = start + out[start..].find("\n}").unwrap() + 2;
        &out[start..end]
    }

    #[test]
    fn test_get_accessor_never_throws_on_miss() {
        for policy in [MissPolicy::Null, MissPolicy::Throw] {
            let options = ArtifactOptions {
                miss_policy: policy,
                ..ArtifactOptions::default()
            };
            let out = assemble(&entries(), &options).unwrap();
            let get = function_body(&out, "getHtmlTemplate");
            assert!(!get.contains("throw"), "{policy:?}: {get}");
            let sentinel = match policy {
                MissPolicy::Null => ": null;",
                MissPolicy::Throw => ": '';",
            };
            assert!(get.contains(sentinel), "{policy:?}: {get}");
        }
    }

    #[test]
    fn test_create_accessor_miss_follows_policy() {
        let null_out = assemble(&entries(), &ArtifactOptions::default()).unwrap();
        let create = function_body(&null_out, "createHtmlFromTemplate");
        assert!(create.contains("return null;"));
        assert!(!create.contains("throw"));

        let options = ArtifactOptions {
            miss_policy: MissPolicy::Throw,
            ..ArtifactOptions::default()
        };
        let throw_out = assemble(&entries(), &options).unwrap();
        let create = function_body(&throw_out, "createHtmlFromTemplate");
        assert!(create.contains("throw new Error('Template not found: ' + name);"));
    }

    #[test]
    fn test_custom_names_flow_through() {
        let options = ArtifactOptions {
            file_name: "Views.gs".into(),
            names: AccessorNames {
                mapping: "VIEWS".into(),
                get: "view".into(),
                create: "renderView".into(),
                html_constructor: "Html.make".into(),
            },
            miss_policy: MissPolicy::Null,
        };
        let out = assemble(&entries(), &options).unwrap();
        assert!(out.contains(" * Views.gs - HTML template strings"));
        assert!(out.contains("var VIEWS = {};"));
        assert!(out.contains("VIEWS['A_B'] = 'a\\\\b';"));
        assert!(out.contains("function view(name) {"));
        assert!(out.contains("function renderView(name) {\n  var html = view(name);"));
        assert!(out.contains("return Html.make(html);"));
        assert!(!out.contains("HTML_TEMPLATES"));
    }

    #[test]
    fn test_key_with_quote_is_escaped() {
        let entries = vec![SourceEntry::new("x.txt", "it's", "")];
        let out = assemble(&entries, &ArtifactOptions::default()).unwrap();
        assert!(out.contains("HTML_TEMPLATES['it\\'s'] = '';"));
    }

    #[test]
    fn test_deterministic() {
        let a = assemble(&entries(), &ArtifactOptions::default()).unwrap();
        let b = assemble(&entries(), &ArtifactOptions::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_header_names_output_file() {
        let config = EmbedConfig {
            output: "out/Templates.gs".into(),
            ..EmbedConfig::default()
        };
        assert_eq!(ArtifactOptions::from_config(&config).file_name, "Templates.gs");
    }
}
