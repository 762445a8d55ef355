//! Command implementation for the CLI.
//!
//! The full command lives here so the binary entry point stays a thin
//! wrapper.

pub mod convert_cmd;
