//! Initialize site use case

use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteConfig};
use std::fs;
use std::path::Path;

/// Initialize a new site at the specified path with default settings.
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize(&SiteConfig::default())?;

    Ok(repo)
}
