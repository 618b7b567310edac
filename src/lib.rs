//! # DiskRank Core Library
//!
//! This crate provides the core functionality for the `diskrank` disk usage
//! scanner: walk a directory tree, aggregate subtree sizes bottom-up and
//! report the largest files and directories found.
//!
//! ## Key Modules
//!
//! - [`scan`]: Recursive traversal and size aggregation.
//! - [`rank`]: Descending ordering and top-N selection.
//! - [`report`]: Human-readable byte counts and the ranked output table.
//! - [`cli`]: The clap argument surface and the interactive prompt fallback.

pub mod cli;
pub mod error;
pub use error::ScanError;

pub mod rank;
pub mod report;
pub mod scan;
