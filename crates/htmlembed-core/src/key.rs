//! Template key resolution.

use crate::config::{KeyMode, SourceSpec};

/// Derive a key from a file name: drop `suffix` when present, then turn every
/// remaining `.` into `_` so the key reads as a bare identifier.
pub fn derive_key(file_name: &str, suffix: &str) -> String {
    let stem = if suffix.is_empty() {
        file_name
    } else {
        file_name.strip_suffix(suffix).unwrap_or(file_name)
    };
    stem.replace('.', "_")
}

/// Resolve the key for one configured source.
///
/// Returns `None` only in explicit mode when the source has no key; the caller
/// skips such sources.
pub fn resolve_key(mode: &KeyMode, source: &SourceSpec) -> Option<String> {
    match mode {
        KeyMode::Derived { suffix } => Some(derive_key(&source.file, suffix)),
        KeyMode::Explicit => source.key.clone(),
    }
}
