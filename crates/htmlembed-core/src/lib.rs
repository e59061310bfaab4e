//! Core library for the htmlembed toolkit.
//!
//! Turns a list of HTML template files into one generated Apps Script source file
//! that holds every template as an escaped string literal in a global mapping, plus
//! two accessor functions for looking templates up at runtime.
//!
//! The stages are independent and usable on their own:
//! - [`escape`] — body escaping for single-quoted JavaScript literals
//! - [`key`] — template key resolution (derived from file names, or explicit)
//! - [`source`] — reading the configured sources
//! - [`assemble`] — pure assembly of the artifact text
//! - [`pipeline`] — the `generate` / `check` flows tying them together

pub mod artifacts;
pub mod assemble;
pub mod config;
pub mod error;
pub mod escape;
pub mod key;
pub mod pipeline;
pub mod project;
pub mod source;
pub mod templates;
