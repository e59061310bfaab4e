use std::path::Path;

use anyhow::Result;

use htmlembed_core::pipeline::{self, CheckOutcome};
use htmlembed_core::project;

use crate::output;

/// Check that the generated file matches the current sources.
///
/// Fails when the file is missing or differs from what `generate` would write.
pub fn run(base_dir: &Path, config_path: &Path) -> Result<()> {
    output::print_header("htmlembed check");

    let config = project::load(config_path)?;
    let output_path = project::output_path(base_dir, &config);

    match pipeline::check(base_dir, &config)? {
        CheckOutcome::UpToDate { digest } => {
            output::print_success(&format!("{} is up to date", output_path.display()));
            output::print_key_value("SHA-256", &digest);
            Ok(())
        }
        CheckOutcome::Stale { expected, found } => {
            output::print_error(&format!("{} is out of date", output_path.display()));
            output::print_key_value("Expected", &expected);
            output::print_key_value("Found", &found);
            anyhow::bail!("generated file is stale; run `htmlembed generate`")
        }
        CheckOutcome::Missing => {
            output::print_error(&format!("{} does not exist", output_path.display()));
            anyhow::bail!("generated file is missing; run `htmlembed generate`")
        }
    }
}
