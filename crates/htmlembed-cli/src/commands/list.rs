use std::path::Path;

use anyhow::Result;

use htmlembed_core::{key, project};

use crate::output;

/// List configured sources with their resolved keys.
pub fn run(base_dir: &Path, config_path: &Path) -> Result<()> {
    output::print_header("htmlembed list");

    let config = project::load(config_path)?;
    output::print_key_value("Miss policy", config.miss_policy.as_str());
    output::print_key_value(
        "Output",
        &project::output_path(base_dir, &config).display().to_string(),
    );
    println!();

    for spec in &config.sources {
        let Some(key) = key::resolve_key(&config.keys, spec) else {
            output::print_warning(&format!("{}: no key in explicit table", spec.file));
            continue;
        };
        if base_dir.join(&spec.file).is_file() {
            output::print_success(&format!("{} → {key}", spec.file));
        } else {
            output::print_warning(&format!("{} → {key} (not found)", spec.file));
        }
    }

    Ok(())
}
