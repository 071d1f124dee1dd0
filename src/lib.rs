//! # Stamp - Architecture Decision Records on disk
//!
//! Stamp keeps ADRs as numbered markdown files in a project directory and
//! manages their lifecycle: creating records, changing status, linking
//! related decisions, and exporting the link graph.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create docs/adr, .stamp.yaml and ADR 0001
//! stamp init
//!
//! # Record a decision
//! stamp new Use PostgreSQL
//!
//! # Supersede an older one
//! stamp link 2 1 supersedes
//!
//! # Render the relations for a README
//! stamp graph --format mermaid
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: `.stamp.yaml` discovery and loading
//! - [`error`]: Error types and result aliases
//! - [`graph`]: Mermaid and DOT export
//! - [`model`]: The ADR record, statuses and filenames
//! - [`relation`]: Typed links between records
//! - [`storage`]: Markdown codec and the file-backed store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.stamp.yaml` files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `StampError` enum and `Result<T>` type alias.
pub mod error;

pub mod graph;
pub mod logging;

/// Data models for ADRs.
///
/// Includes `Adr`, `Status`, `StatusValue` and the filename helpers.
pub mod model;

pub mod relation;

/// File-based storage layer.
///
/// Reads and writes ADRs as markdown files in the configured directory.
pub mod storage;
