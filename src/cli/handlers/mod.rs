mod edit;
mod graph;
mod init;
mod link;
mod list;
mod new;
mod show;
mod status;
mod utils;

pub use edit::handle_edit;
pub use graph::handle_graph;
pub use init::handle_init;
pub use link::handle_link;
pub use list::{ListParams, handle_list};
pub use new::handle_new;
pub use show::handle_show;
pub use status::handle_status;

use crate::config::StampConfig;
use crate::storage::AdrStore;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub store: AdrStore,
}

impl CommandContext {
    pub fn new(directory: PathBuf) -> Self {
        Self {
            store: AdrStore::new(directory),
        }
    }

    /// Use `dir_override` when given, otherwise the directory named by the
    /// nearest `.stamp.yaml` above `cwd`.
    pub fn resolve(cwd: &Path, dir_override: Option<PathBuf>) -> Result<Self> {
        let directory = match dir_override {
            Some(dir) => cwd.join(dir),
            None => {
                let (config, root) =
                    StampConfig::load(cwd).context("Failed to load stamp configuration")?;
                config.adr_directory(&root)
            }
        };
        tracing::debug!(dir = %directory.display(), "Using ADR directory");
        Ok(Self::new(directory))
    }
}
