//! CLI command implementations for htmlembed.
//!
//! Each module corresponds to a subcommand (`htmlembed <command>`).

pub mod check;
pub mod generate;
pub mod init;
pub mod list;
