use std::fs;
use std::path::{Path, PathBuf};

use super::core::PortfolioConfig;
use super::validation::validate_config_result;
use crate::errors::{Error, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".portfolio-evm.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<PortfolioConfig> {
    let config = toml::from_str::<PortfolioConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;
    validate_config_result(&config)?;
    Ok(config)
}

/// Load a config file the user named explicitly. Unlike the ancestor
/// search, every failure here is reported to the caller.
pub fn load_config_from_path(path: &Path) -> Result<PortfolioConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system(format!("Failed to read config: {e}"), path))?;
    let config = parse_and_validate_config(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a candidate location found during the search
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<PortfolioConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{} in {}. Using defaults.", e, config_path.display());
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case while walking up the tree
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors starting at `start`, nearest first
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file, falling back to defaults
pub fn discover_config(start: PathBuf) -> PortfolioConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            PortfolioConfig::default()
        })
}

/// Resolve configuration for a run: an explicit path wins, otherwise the
/// nearest `.portfolio-evm.toml` above the working directory.
pub fn load_config(explicit: Option<&Path>) -> Result<PortfolioConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(PortfolioConfig::default())
        }
    }
}
