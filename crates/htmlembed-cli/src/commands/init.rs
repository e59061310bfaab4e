use std::path::Path;

use anyhow::Result;
use dialoguer::Select;

use htmlembed_core::config::{EmbedConfig, MissPolicy};
use htmlembed_core::project;

use crate::output;
use crate::{KeyModeChoice, MissPolicyChoice};

/// Write a default `htmlembed.config.json`.
///
/// Lists the standard template files. If no miss policy is given and a user is at
/// the terminal, prompts for one; otherwise falls back to `null`.
pub fn run(
    config_path: &Path,
    key_mode: &KeyModeChoice,
    miss_policy: Option<MissPolicyChoice>,
    force: bool,
) -> Result<()> {
    output::print_header("htmlembed init");

    let policy = match miss_policy {
        Some(p) => p.to_policy(),
        None if console::user_attended() => {
            let options = [MissPolicy::Null, MissPolicy::Throw];
            let descriptions = &[
                "null  — lookups of unknown names return null",
                "throw — lookups return '', creating an HtmlOutput throws",
            ];

            let selection = Select::new()
                .with_prompt("Behaviour for unknown template names")
                .items(descriptions)
                .default(0)
                .interact()?;

            options[selection]
        }
        None => MissPolicy::default(),
    };

    let config = EmbedConfig::default_with_templates(key_mode.to_mode(), policy);
    project::init(config_path, &config, force)?;

    output::print_success(&format!("Wrote {}", config_path.display()));
    output::print_key_value("Sources", &config.sources.len().to_string());
    output::print_key_value("Miss policy", policy.as_str());
    output::print_key_value("Output", &config.output.display().to_string());
    println!();
    println!("  Next steps:");
    println!("    htmlembed list");
    println!("    htmlembed generate");
    println!();

    Ok(())
}
