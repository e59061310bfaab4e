//! Configuration file (`htmlembed.config.json`).
//!
//! Replaces the fixed file lists of the old conversion scripts. Every field has a
//! default, so a config only needs to name its sources:
//!
//! ```json
//! {
//!   "keys": { "mode": "derived", "suffix": ".txt" },
//!   "sources": [{ "file": "SimpleSetup.txt" }, { "file": "PromptEditor.txt" }]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EmbedError, Result};

/// Default config file name, resolved against the base directory.
pub const CONFIG_FILE: &str = "htmlembed.config.json";

/// Template list shipped by `init`, in emission order.
pub const DEFAULT_TEMPLATES: &[&str] = &[
    "SimpleSetup",
    "PromptEditor",
    "ProgressSidebar",
    "CategorySelectionDialog",
    "SetupDialog",
    "Shipping_Rates_Dialog",
    "Profit_Amounts_Dialog",
];

/// How template keys are obtained from source file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum KeyMode {
    /// Strip `suffix`, then replace remaining dots with underscores.
    Derived {
        #[serde(default = "default_suffix")]
        suffix: String,
    },
    /// Use the `key` given next to each source; sources without one are skipped.
    Explicit,
}

impl Default for KeyMode {
    fn default() -> Self {
        Self::Derived {
            suffix: default_suffix(),
        }
    }
}

/// What the generated accessors do when a template name is not in the mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissPolicy {
    /// `get` returns `null`, `create` returns `null`.
    #[default]
    Null,
    /// `get` returns `''`, `create` throws `Error('Template not found: ' + name)`.
    Throw,
}

impl MissPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Throw => "throw",
        }
    }
}

/// Names used in the generated JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessorNames {
    /// Global mapping variable.
    pub mapping: String,
    /// Lookup function returning the raw HTML string.
    pub get: String,
    /// Function wrapping the HTML string in an `HtmlOutput`.
    pub create: String,
    /// Constructor called by `create` (a dotted path such as `HtmlService.createHtmlOutput`).
    pub html_constructor: String,
}

impl Default for AccessorNames {
    fn default() -> Self {
        Self {
            mapping: "HTML_TEMPLATES".into(),
            get: "getHtmlTemplate".into(),
            create: "createHtmlFromTemplate".into(),
            html_constructor: "HtmlService.createHtmlOutput".into(),
        }
    }
}

/// One entry of the source list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    /// File name relative to the base directory.
    pub file: String,
    /// Template key, consulted only in [`KeyMode::Explicit`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl SourceSpec {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            key: None,
        }
    }

    pub fn with_key(file: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            key: Some(key.into()),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Artifact path relative to the base directory.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub keys: KeyMode,
    #[serde(default)]
    pub miss_policy: MissPolicy,
    #[serde(default)]
    pub names: AccessorNames,
    #[serde(default)]
    pub sources: Vec<SourceSpec>,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            keys: KeyMode::default(),
            miss_policy: MissPolicy::default(),
            names: AccessorNames::default(),
            sources: Vec::new(),
        }
    }
}

impl EmbedConfig {
    /// Config listing [`DEFAULT_TEMPLATES`] as `<name>.txt` sources.
    ///
    /// In explicit mode each source carries its key, mirroring the keyed table the
    /// config replaces.
    pub fn default_with_templates(keys: KeyMode, miss_policy: MissPolicy) -> Self {
        let explicit = matches!(keys, KeyMode::Explicit);
        let sources = DEFAULT_TEMPLATES
            .iter()
            .map(|name| {
                let file = format!("{name}.txt");
                if explicit {
                    SourceSpec::with_key(file, *name)
                } else {
                    SourceSpec::new(file)
                }
            })
            .collect();

        Self {
            keys,
            miss_policy,
            sources,
            ..Self::default()
        }
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| EmbedError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|e| EmbedError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| EmbedError::ConfigSerialize {
                path: path.to_path_buf(),
                source: e,
            })?;
        std::fs::write(path, json + "\n")?;
        Ok(())
    }

    /// Check that every name emitted into JavaScript is an identifier.
    pub fn validate(&self) -> Result<()> {
        check_identifier("mapping name", &self.names.mapping)?;
        check_identifier("get accessor name", &self.names.get)?;
        check_identifier("create accessor name", &self.names.create)?;
        for part in self.names.html_constructor.split('.') {
            if !is_identifier(part) {
                return Err(EmbedError::InvalidIdentifier {
                    field: "html constructor",
                    value: self.names.html_constructor.clone(),
                });
            }
        }
        Ok(())
    }
}

fn default_suffix() -> String {
    ".txt".into()
}

fn default_output() -> PathBuf {
    PathBuf::from("Library/HtmlTemplates.gs")
}

fn check_identifier(field: &'static str, value: &str) -> Result<()> {
    if is_identifier(value) {
        Ok(())
    } else {
        Err(EmbedError::InvalidIdentifier {
            field,
            value: value.to_string(),
        })
    }
}

/// ASCII JavaScript identifier: `[A-Za-z_$][A-Za-z0-9_$]*`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
