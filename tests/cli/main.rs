//! CLI integration tests for mdabbr.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (format, parse, lint)
//! - Stdin/stdout handling
//! - Exit codes
//! - File I/O operations

mod common;
mod format;
mod lint;
mod parse;
