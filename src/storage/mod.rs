//! File-based storage layer for ADRs.
//!
//! The configured directory is the whole database: one markdown file per ADR,
//! named `NNNN-slug.md`. There is no index; numbers and filenames are derived
//! from the files themselves.
//!
//! ## File Format
//!
//! ```markdown
//! # 2. Use PostgreSQL
//!
//! Date: 2024-01-15
//!
//! ## Status
//!
//! Superseded
//!
//! Superseded by [ADR-0005](0005-use-mysql.md)
//!
//! ## Context
//!
//! ...
//! ```
//!
//! ## Components
//!
//! - [`AdrStore`]: list, load, save and numbering over one directory
//! - [`parse_markdown`]: lenient parse of an ADR file
//! - [`render_markdown`]: deterministic rendering of an ADR

mod markdown;
mod store;

pub use markdown::{parse_markdown, render_markdown};
pub use store::AdrStore;
