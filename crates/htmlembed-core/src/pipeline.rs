//! Generation pipeline: read sources, assemble, write or compare.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::artifacts;
use crate::assemble::{assemble, ArtifactOptions};
use crate::config::EmbedConfig;
use crate::error::Result;
use crate::project;
use crate::source::{load_sources, Skipped, SourceEntry};

/// One embedded source in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbeddedEntry {
    pub file: String,
    pub key: String,
    /// Size of the raw source content in bytes.
    pub bytes: usize,
}

impl From<&SourceEntry> for EmbeddedEntry {
    fn from(entry: &SourceEntry) -> Self {
        Self {
            file: entry.file.clone(),
            key: entry.key.clone(),
            bytes: entry.content.len(),
        }
    }
}

/// Assembled artifact held in memory.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub text: String,
    pub entries: Vec<EmbeddedEntry>,
    pub skipped: Vec<Skipped>,
    /// Keys assigned more than once; the last assignment wins in the generated mapping.
    pub duplicate_keys: Vec<String>,
}

/// Summary of a `generate` run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub output: PathBuf,
    /// Artifact size in bytes.
    pub bytes: usize,
    /// SHA-256 of the artifact, hex.
    pub digest: String,
    pub entries: Vec<EmbeddedEntry>,
    pub skipped: Vec<Skipped>,
    pub duplicate_keys: Vec<String>,
}

/// Result of comparing the on-disk artifact with a fresh assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate { digest: String },
    Stale { expected: String, found: String },
    Missing,
}

/// Read sources and assemble the artifact without touching the output file.
pub fn render(base_dir: &Path, config: &EmbedConfig) -> Result<Rendered> {
    let loaded = load_sources(base_dir, config)?;
    let duplicate_keys = find_duplicate_keys(&loaded.entries);
    for key in &duplicate_keys {
        tracing::warn!("template key '{key}' is assigned more than once; the last source wins");
    }

    let text = assemble(&loaded.entries, &ArtifactOptions::from_config(config))?;
    Ok(Rendered {
        text,
        entries: loaded.entries.iter().map(EmbeddedEntry::from).collect(),
        skipped: loaded.skipped,
        duplicate_keys,
    })
}

/// Assemble and write the artifact to the configured output path.
pub fn generate(base_dir: &Path, config: &EmbedConfig) -> Result<GenerateReport> {
    let rendered = render(base_dir, config)?;
    let output = project::output_path(base_dir, config);

    artifacts::write(&output, &rendered.text)?;
    tracing::info!(
        "wrote {} ({} templates, {} bytes)",
        output.display(),
        rendered.entries.len(),
        rendered.text.len()
    );

    Ok(GenerateReport {
        output,
        bytes: rendered.text.len(),
        digest: artifacts::digest(rendered.text.as_bytes()),
        entries: rendered.entries,
        skipped: rendered.skipped,
        duplicate_keys: rendered.duplicate_keys,
    })
}

/// Compare the artifact on disk with what `generate` would write.
pub fn check(base_dir: &Path, config: &EmbedConfig) -> Result<CheckOutcome> {
    let rendered = render(base_dir, config)?;
    let output = project::output_path(base_dir, config);
    let expected = artifacts::digest(rendered.text.as_bytes());

    let outcome = match artifacts::read_existing(&output)? {
        None => CheckOutcome::Missing,
        Some(existing) => {
            let found = artifacts::digest(&existing);
            if found == expected {
                CheckOutcome::UpToDate { digest: expected }
            } else {
                CheckOutcome::Stale { expected, found }
            }
        }
    };
    Ok(outcome)
}

/// Keys that occur more than once, in order of their second occurrence.
fn find_duplicate_keys(entries: &[SourceEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for entry in entries {
        if !seen.insert(entry.key.as_str()) && !duplicates.contains(&entry.key) {
            duplicates.push(entry.key.clone());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceSpec;
    use crate::source::SkipReason;

    fn setup(files: &[(&str, &str)], listed: &[&str]) -> (tempfile::TempDir, EmbedConfig) {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }
        let config = EmbedConfig {
            sources: listed.iter().map(|f| SourceSpec::new(*f)).collect(),
            ..EmbedConfig::default()
        };
        (dir, config)
    }

    #[test]
    fn test_generate_writes_present_sources_only() {
        let (dir, config) = setup(
            &[("SimpleSetup.txt", "<div>setup</div>\n"), ("PromptEditor.txt", "<p>'hi'</p>")],
            &["SimpleSetup.txt", "ProgressSidebar.txt", "PromptEditor.txt"],
        );
        let report = generate(dir.path(), &config).unwrap();

        assert_eq!(report.output, dir.path().join("Library/HtmlTemplates.gs"));
        let text = std::fs::read_to_string(&report.output).unwrap();
        assert_eq!(report.bytes, text.len());
        assert_eq!(report.digest, artifacts::digest(text.as_bytes()));

        let statements: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with("HTML_TEMPLATES['"))
            .collect();
        assert_eq!(
            statements,
            [
                "HTML_TEMPLATES['SimpleSetup'] = '<div>setup</div>\\n';",
                "HTML_TEMPLATES['PromptEditor'] = '<p>\\'hi\\'</p>';",
            ]
        );
        assert_eq!(
            report.entries,
            vec![
                EmbeddedEntry {
                    file: "SimpleSetup.txt".into(),
                    key: "SimpleSetup".into(),
                    bytes: 17
                },
                EmbeddedEntry {
                    file: "PromptEditor.txt".into(),
                    key: "PromptEditor".into(),
                    bytes: 11
                },
            ]
        );
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].file, "ProgressSidebar.txt");
        assert_eq!(report.skipped[0].reason, SkipReason::Missing);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let (dir, config) = setup(&[("A.txt", "a\r\nb")], &["A.txt"]);
        let first = generate(dir.path(), &config).unwrap();
        let bytes_first = std::fs::read(&first.output).unwrap();
        let second = generate(dir.path(), &config).unwrap();
        let bytes_second = std::fs::read(&second.output).unwrap();
        assert_eq!(first.digest, second.digest);
        assert_eq!(bytes_first, bytes_second);
    }

    #[test]
    fn test_check_tracks_generate() {
        let (dir, config) = setup(&[("A.txt", "one")], &["A.txt"]);
        assert_eq!(check(dir.path(), &config).unwrap(), CheckOutcome::Missing);

        let report = generate(dir.path(), &config).unwrap();
        assert_eq!(
            check(dir.path(), &config).unwrap(),
            CheckOutcome::UpToDate {
                digest: report.digest.clone()
            }
        );

        std::fs::write(dir.path().join("A.txt"), "two").unwrap();
        match check(dir.path(), &config).unwrap() {
            CheckOutcome::Stale { expected, found } => {
                assert_eq!(found, report.digest);
                assert_ne!(expected, found);
            }
            other => panic!("expected stale, got {other:?}"),
        }
    }

    #[test]
    fn test_check_compares_raw_bytes() {
        // U+FFFD is what a lossy decode of 0xFF would produce.
        let (dir, config) = setup(&[("A.txt", "x\u{FFFD}y")], &["A.txt"]);
        let report = generate(dir.path(), &config).unwrap();

        let on_disk = std::fs::read(&report.output).unwrap();
        let replacement = "\u{FFFD}".as_bytes();
        let at = on_disk
            .windows(replacement.len())
            .position(|w| w == replacement)
            .unwrap();
        let mut corrupted = on_disk[..at].to_vec();
        corrupted.push(0xff);
        corrupted.extend_from_slice(&on_disk[at + replacement.len()..]);
        std::fs::write(&report.output, &corrupted).unwrap();

        match check(dir.path(), &config).unwrap() {
            CheckOutcome::Stale { expected, found } => {
                assert_eq!(expected, report.digest);
                assert_eq!(found, artifacts::digest(&corrupted));
            }
            other => panic!("expected stale, got {other:?}"),
        }
    }

    #[test]
    fn test_check_does_not_write() {
        let (dir, config) = setup(&[("A.txt", "one")], &["A.txt"]);
        check(dir.path(), &config).unwrap();
        assert!(!project::output_path(dir.path(), &config).exists());
    }

    #[test]
    fn test_duplicate_keys_reported_and_last_wins() {
        let (dir, mut config) = setup(&[("A.txt", "first"), ("A", "second")], &[]);
        config.sources = vec![SourceSpec::new("A.txt"), SourceSpec::new("A")];
        let rendered = render(dir.path(), &config).unwrap();

        assert_eq!(rendered.duplicate_keys, vec!["A".to_string()]);
        let first = rendered.text.find("HTML_TEMPLATES['A'] = 'first';").unwrap();
        let second = rendered.text.find("HTML_TEMPLATES['A'] = 'second';").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_failed_read_leaves_previous_artifact() {
        let (dir, config) = setup(&[("A.txt", "ok")], &["A.txt"]);
        let report = generate(dir.path(), &config).unwrap();

        std::fs::write(dir.path().join("A.txt"), [0xffu8, 0xfe]).unwrap();
        assert!(generate(dir.path(), &config).is_err());
        let text = std::fs::read_to_string(&report.output).unwrap();
        assert_eq!(artifacts::digest(text.as_bytes()), report.digest);
    }

    #[test]
    fn test_find_duplicate_keys() {
        let entries = vec![
            SourceEntry::new("a", "x", ""),
            SourceEntry::new("b", "y", ""),
            SourceEntry::new("c", "x", ""),
            SourceEntry::new("d", "x", ""),
        ];
        assert_eq!(find_duplicate_keys(&entries), vec!["x".to_string()]);
    }
}
