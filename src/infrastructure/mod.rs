//! Infrastructure layer - Site configuration and content files

pub mod config;
pub mod frontmatter;
pub mod repository;

pub use config::SiteConfig;
pub use repository::{FileSystemRepository, SiteRepository};
