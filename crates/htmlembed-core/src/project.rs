//! Locating, creating and loading the config in a base directory.
//!
//! ## Directory layout
//!
//! ```text
//! <base>/
//! ├── htmlembed.config.json     # EmbedConfig
//! ├── SimpleSetup.txt           # sources, paths relative to <base>
//! ├── ...
//! └── Library/HtmlTemplates.gs  # generated artifact (config `output`)
//! ```

use std::path::{Path, PathBuf};

use crate::config::EmbedConfig;
use crate::error::{EmbedError, Result};

/// Resolve the config path; relative paths are taken from `base_dir`.
pub fn config_path(base_dir: &Path, config: &Path) -> PathBuf {
    if config.is_absolute() {
        config.to_path_buf()
    } else {
        base_dir.join(config)
    }
}

/// Resolve the artifact path for a loaded config.
pub fn output_path(base_dir: &Path, config: &EmbedConfig) -> PathBuf {
    base_dir.join(&config.output)
}

/// Write a new config file. Refuses to replace an existing one unless `force`.
pub fn init(path: &Path, config: &EmbedConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(EmbedError::ConfigExists(path.to_path_buf()));
    }
    config.validate()?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    config.save(path)?;
    tracing::info!("wrote config {}", path.display());
    Ok(())
}

/// Load the config for a base directory.
pub fn load(path: &Path) -> Result<EmbedConfig> {
    let config = EmbedConfig::load(path)?;
    tracing::debug!(
        "loaded {} ({} sources, miss policy {})",
        path.display(),
        config.sources.len(),
        config.miss_policy.as_str()
    );
    Ok(config)
}
