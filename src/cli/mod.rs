//! CLI command handlers

pub mod commands;

pub use commands::{resolve_paths, summarize, summarize_at, RunPaths};
