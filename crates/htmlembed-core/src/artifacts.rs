//! Writing and fingerprinting the generated artifact.

use std::io::ErrorKind;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::Result;

/// Hex-encoded SHA-256 of the artifact bytes.
pub fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Write the artifact, creating parent directories. Replaces any existing file.
pub fn write(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, text)?;
    Ok(())
}

/// Read an existing artifact's raw bytes, `None` if there is none yet.
pub fn read_existing(path: &Path) -> Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
