//! Reading the configured source files.
//!
//! A listed file that does not exist is skipped with a warning and the rest of the
//! list is still processed. Any other read failure, or content that is not UTF-8,
//! aborts the whole load so no artifact is assembled from a partial list.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;

use crate::config::EmbedConfig;
use crate::error::{EmbedError, Result};
use crate::key;

/// A source file read from disk, paired with its resolved key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub file: String,
    pub key: String,
    pub content: String,
}

impl SourceEntry {
    pub fn new(file: impl Into<String>, key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            key: key.into(),
            content: content.into(),
        }
    }
}

/// Why a configured source did not make it into the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The file does not exist under the base directory.
    Missing,
    /// Explicit key mode and the source has no key.
    NoKey,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "file not found"),
            Self::NoKey => write!(f, "no key in explicit table"),
        }
    }
}

/// A configured source that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    pub file: String,
    pub reason: SkipReason,
}

/// Result of reading the source list, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct LoadedSources {
    pub entries: Vec<SourceEntry>,
    pub skipped: Vec<Skipped>,
}

/// Read every configured source relative to `base_dir`.
pub fn load_sources(base_dir: &Path, config: &EmbedConfig) -> Result<LoadedSources> {
    let mut loaded = LoadedSources::default();

    for spec in &config.sources {
        let Some(key) = key::resolve_key(&config.keys, spec) else {
            tracing::warn!("{}: no key in explicit table, skipping", spec.file);
            loaded.skipped.push(Skipped {
                file: spec.file.clone(),
                reason: SkipReason::NoKey,
            });
            continue;
        };

        let path = base_dir.join(&spec.file);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("{} not found, skipping", path.display());
                loaded.skipped.push(Skipped {
                    file: spec.file.clone(),
                    reason: SkipReason::Missing,
                });
                continue;
            }
            Err(e) => return Err(EmbedError::SourceRead { path, source: e }),
        };

        let content =
            String::from_utf8(bytes).map_err(|e| EmbedError::SourceDecode {
                path: path.clone(),
                source: e,
            })?;

        tracing::debug!("read {} ({} bytes) as '{key}'", path.display(), content.len());
        loaded.entries.push(SourceEntry {
            file: spec.file.clone(),
            key,
            content,
        });
    }

    Ok(loaded)
}
