//! File system site repository

use crate::domain::DiaryEntry;
use crate::error::{DiaryError, Result};
use crate::infrastructure::config::{SiteConfig, CONFIG_FILE};
use crate::infrastructure::frontmatter::parse_entry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Diary content folder, relative to the site root
pub const DIARY_DIR: &str = "content/diary";

/// Extension of diary entry files
const ENTRY_EXTENSION: &str = "mdx";

/// Abstract repository for site content
pub trait SiteRepository {
    /// Get the root directory of this site
    fn root(&self) -> &Path;

    /// Load configuration from site.toml
    fn load_config(&self) -> Result<SiteConfig>;

    /// Save configuration to site.toml
    fn save_config(&self, config: &SiteConfig) -> Result<()>;

    /// Check if site.toml exists
    fn is_initialized(&self) -> bool;

    /// Load every diary entry, newest first
    fn load_entries(&self) -> Result<Vec<DiaryEntry>>;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    /// Also read entries from nested folders
    pub recursive: bool,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository {
            root,
            recursive: false,
        }
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Discover the site root by walking up from current directory
    /// First checks AHORA_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("AHORA_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config(&path) {
                debug!(root = %path.display(), "using AHORA_ROOT");
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(DiaryError::Config(format!(
                    "AHORA_ROOT is set to '{}' but no {} found. \
                    Run 'ahora init' in that directory or unset AHORA_ROOT.",
                    path.display(),
                    CONFIG_FILE
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the site root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config(&current) {
                debug!(root = %current.display(), "discovered site root");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(DiaryError::NotSiteDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_config(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }

    /// Folder holding the diary files
    pub fn diary_dir(&self) -> PathBuf {
        self.root.join(DIARY_DIR)
    }

    /// Write site.toml and create the diary folder
    pub fn initialize(&self, config: &SiteConfig) -> Result<()> {
        if self.is_initialized() {
            return Err(DiaryError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.diary_dir())?;
        self.save_config(config)?;
        info!(root = %self.root.display(), "initialized site");
        Ok(())
    }

    fn is_entry_file(path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some(ENTRY_EXTENSION)
    }

    fn entry_files(&self) -> Result<Vec<PathBuf>> {
        let dir = self.diary_dir();
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "no diary folder");
            return Ok(Vec::new());
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(&dir)
            .max_depth(max_depth)
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !name.starts_with('.'))
            });

        let mut files = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if entry.file_type().is_file() && Self::is_entry_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Read and parse one diary file; `None` when it has no front matter
    pub fn read_entry(&self, path: &Path) -> Result<Option<DiaryEntry>> {
        let source = fs::read_to_string(path)?;
        let parsed = parse_entry(&source).map_err(|e| DiaryError::Frontmatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(parsed.map(|mut entry| {
            if entry.slug.is_empty() {
                entry.slug = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default()
                    .to_string();
            }
            entry
        }))
    }
}

impl SiteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<SiteConfig> {
        SiteConfig::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &SiteConfig) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config(&self.root)
    }

    fn load_entries(&self) -> Result<Vec<DiaryEntry>> {
        let mut entries = Vec::new();

        for path in self.entry_files()? {
            match self.read_entry(&path)? {
                Some(entry) => entries.push(entry),
                None => warn!(file = %path.display(), "skipping file without front matter"),
            }
        }

        // ISO dates order lexicographically; validity is checked where dates are compared
        entries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        info!(count = entries.len(), "loaded diary entries");
        Ok(entries)
    }
}
