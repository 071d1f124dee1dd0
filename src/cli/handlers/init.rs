use crate::config::{CONFIG_FILE_NAME, StampConfig};
use crate::error::StampError;
use crate::model::Adr;
use crate::storage::AdrStore;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn handle_init(cwd: &Path, directory: String) -> Result<()> {
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(StampError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let adr_dir = cwd.join(&directory);
    std::fs::create_dir_all(&adr_dir)?;

    let config = StampConfig { directory };
    config.save(&config_path)?;

    let store = AdrStore::new(&adr_dir);
    let mut first = Adr::initial_record();
    store.save(&mut first)?;

    tracing::info!(dir = %adr_dir.display(), "Initialized ADR directory");

    println!(
        "{} ADR directory at {}",
        "Initialized".green(),
        adr_dir.display()
    );
    println!("  Configuration saved to {}", CONFIG_FILE_NAME);
    println!(
        "  {} {}",
        "Created".green(),
        first.filename_or_default()
    );

    Ok(())
}
