use std::path::Path;

use anyhow::Result;

use htmlembed_core::{pipeline, project};

use crate::output;

/// Generate the templates file.
///
/// Missing sources are reported and skipped; they never fail the run.
pub fn run(base_dir: &Path, config_path: &Path, json: bool) -> Result<()> {
    let config = project::load(config_path)?;
    let report = pipeline::generate(base_dir, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print_header("htmlembed generate");

    for entry in &report.entries {
        output::print_success(&format!(
            "{} → {} ({} bytes)",
            entry.file, entry.key, entry.bytes
        ));
    }
    for skipped in &report.skipped {
        output::print_warning(&format!("{}: {}", skipped.file, skipped.reason));
    }
    for key in &report.duplicate_keys {
        output::print_warning(&format!(
            "key '{key}' is assigned more than once; the last source wins"
        ));
    }

    println!();
    output::print_success(&format!("Updated {}", report.output.display()));
    output::print_key_value("Templates", &report.entries.len().to_string());
    output::print_key_value("Total size", &format!("{} bytes", report.bytes));
    output::print_key_value("SHA-256", &report.digest);

    Ok(())
}
