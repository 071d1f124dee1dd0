//! Data models for stamp.
//!
//! - [`Adr`]: one Architecture Decision Record
//! - [`Status`]: the closed status vocabulary (draft, proposed, accepted, ...)
//! - [`StatusValue`]: what a file actually says under `## Status`, which may be
//!   outside the vocabulary when a file was edited by hand
//! - [`slugify`] / [`format_filename`]: title to filename derivation

mod adr;
mod filename;
mod types;

pub use adr::Adr;
pub use filename::{format_filename, slugify};
pub use types::{Status, StatusValue};
