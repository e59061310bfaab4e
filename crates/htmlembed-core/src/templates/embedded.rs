//! Compile-time embedded templates for the generated artifact.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/htmlembed-core/src/templates/embedded.rs`).
//!
//! ## Adding a new template
//!
//! 1. Place the template file under `templates/artifact/`
//! 2. Add a `pub const` here with `include_str!("../../../../templates/<path>")`
//! 3. Use the constant from [`crate::assemble`]
//! 4. Run `cargo build` — if the path is wrong, compilation will fail
//!
//! ## Warning
//!
//! Do NOT modify template files without checking that the Handlebars variables still match
//! what the assembler passes in. Changing any template text changes every generated
//! artifact, and `htmlembed check` will report existing outputs as stale.

use crate::config::MissPolicy;

// -------------------------------------------------------
// Header
// -------------------------------------------------------

pub const HEADER: &str = include_str!("../../../../templates/artifact/header.js.hbs");

// -------------------------------------------------------
// Accessor routines, one pair per miss policy
// -------------------------------------------------------

pub const ACCESSORS_NULL: &str = include_str!("../../../../templates/artifact/accessors_null.js.hbs");
pub const ACCESSORS_THROW: &str = include_str!("../../../../templates/artifact/accessors_throw.js.hbs");

/// Accessor template for a miss policy.
pub fn accessors_for(policy: MissPolicy) -> &'static str {
    match policy {
        MissPolicy::Null => ACCESSORS_NULL,
        MissPolicy::Throw => ACCESSORS_THROW,
    }
}
