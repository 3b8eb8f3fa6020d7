pub mod output;
pub mod writers;

pub use output::{create_writer, OutputFormat, OutputWriter};

use std::fs;
use std::path::Path;

use crate::errors::{Error, Result};

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::file_system(format!("Cannot write file: {e}"), path))
}
