//! Export delivery
//!
//! The exporter produces bytes plus a fixed filename; delivering them here
//! means writing into the configured export directory.

use std::io;
use std::path::{Path, PathBuf};

use plateful_client::ExportResult;

/// Write an export artifact into `dir`, returning the final path
pub fn save(result: &ExportResult, dir: &Path) -> io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&result.filename);
    std::fs::write(&path, &result.data)?;
    Ok(path)
}
