use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML};
use crate::io;

/// Write the default config into `dir`, refusing to clobber an existing
/// file unless `force` is set. Returns the written path.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG_TOML)?;
    tracing::info!(path = %config_path.display(), "wrote default configuration");
    Ok(config_path)
}
